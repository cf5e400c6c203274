//! Game state management.

use std::sync::Arc;

use crate::error::{BoardError, BoardResult};
use crate::game::player::{opponent, slot};
use crate::game::{
    Cell, Coord, Grid, MoveVariant, PlayerId, QUEEN_ONE, QUEEN_TWO, Roster, Variant, movegen,
    render_board,
};

/// Default board width.
pub const DEFAULT_WIDTH: u16 = 9;

/// Default board height.
pub const DEFAULT_HEIGHT: u16 = 9;

/// What applying a move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The next player has at least one legal move.
    Continue,
    /// The next player is isolated; the mover wins.
    Isolated {
        /// The player who just moved.
        winner: PlayerId,
    },
}

impl MoveOutcome {
    /// Check if the move ended the game.
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, MoveOutcome::Isolated { .. })
    }

    /// The winner, if the move ended the game.
    #[must_use]
    pub const fn winner(self) -> Option<PlayerId> {
        match self {
            MoveOutcome::Continue => None,
            MoveOutcome::Isolated { winner } => Some(winner),
        }
    }
}

/// Complete board state.
///
/// `GameState` is a plain value: [`Clone`] deep-copies the grid, so a clone
/// can be searched and mutated freely without touching the original. The
/// roster and variant rule are immutable and shared between clones.
#[derive(Debug, Clone)]
pub struct GameState {
    /// The cell array.
    grid: Grid,
    /// Last position per player slot; `None` until the first move.
    positions: [Option<Coord>; 2],
    /// Player whose turn it is.
    active: PlayerId,
    /// Moves applied since the start, placements included.
    move_count: u32,
    /// Display labels.
    roster: Arc<Roster>,
    /// Side-effect rule run on every move after the first.
    variant: Arc<dyn MoveVariant>,
}

impl GameState {
    /// Create an empty board with queen one to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if width or height is zero.
    pub fn new(width: u16, height: u16, roster: Roster, variant: Variant) -> BoardResult<Self> {
        Self::with_rule(width, height, roster, variant.rule())
    }

    /// Create an empty board with a custom variant rule.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] if width or height is zero.
    pub fn with_rule(
        width: u16,
        height: u16,
        roster: Roster,
        variant: Arc<dyn MoveVariant>,
    ) -> BoardResult<Self> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            positions: [None; 2],
            active: QUEEN_ONE,
            move_count: 0,
            roster: Arc::new(roster),
            variant,
        })
    }

    /// An empty board sharing this board's dimensions, roster and rule.
    #[must_use]
    pub fn fresh(&self) -> Self {
        Self {
            grid: self.grid.cleared(),
            positions: [None; 2],
            active: QUEEN_ONE,
            move_count: 0,
            roster: Arc::clone(&self.roster),
            variant: Arc::clone(&self.variant),
        }
    }

    /// Board width in cells.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Board height in cells.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Borrow the cell array.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of moves applied since the start of the game.
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Name of the variant rule in force.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        self.variant.name()
    }

    /// The display labels.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Copy of the physical board.
    #[must_use]
    pub fn get_state(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the board, e.g. to set up a position for testing.
    ///
    /// Each player's position is the cell holding its queen, or "not moved"
    /// if there is none. The move count is rebuilt as the number of blocked
    /// plus occupied cells. Dimensions follow the injected grid.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] if a cell holds a player other
    /// than queen one or two, and [`BoardError::DuplicateQueen`] if a queen
    /// sits on more than one cell. The state is unchanged in either case.
    pub fn set_state(&mut self, grid: Grid, queen_one_to_move: bool) -> BoardResult<()> {
        let mut found: [Option<Coord>; 2] = [None; 2];
        for (coord, cell) in grid.iter() {
            let Cell::Occupied(player) = cell else {
                continue;
            };
            let idx = slot(player)?;
            if let Some(first) = found[idx] {
                return Err(BoardError::DuplicateQueen {
                    player,
                    first,
                    second: coord,
                });
            }
            found[idx] = Some(coord);
        }

        self.positions = found;
        let taken = grid.count_blocked() + grid.count_occupied();
        self.move_count = u32::try_from(taken).unwrap_or(u32::MAX);
        self.active = if queen_one_to_move {
            QUEEN_ONE
        } else {
            QUEEN_TWO
        };
        self.grid = grid;
        Ok(())
    }

    /// Mutable access to the board, bypassing every rule.
    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Slot of the active player.
    #[inline]
    fn active_slot(&self) -> usize {
        usize::from(self.active == QUEEN_TWO)
    }

    /// Player whose turn it is.
    #[must_use]
    pub const fn active_player(&self) -> PlayerId {
        self.active
    }

    /// Player waiting for the opponent to move.
    #[must_use]
    pub const fn inactive_player(&self) -> PlayerId {
        if self.active == QUEEN_ONE {
            QUEEN_TWO
        } else {
            QUEEN_ONE
        }
    }

    /// Label of a player.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn label(&self, player: PlayerId) -> BoardResult<&str> {
        self.roster.label(player)
    }

    /// Label of the active player's queen.
    #[must_use]
    pub fn active_label(&self) -> &str {
        self.roster.label(self.active).unwrap_or_default()
    }

    /// Label of the inactive player's queen.
    #[must_use]
    pub fn inactive_label(&self) -> &str {
        self.roster.label(self.inactive_player()).unwrap_or_default()
    }

    /// Position of the active player.
    #[must_use]
    pub fn active_position(&self) -> Option<Coord> {
        self.positions[self.active_slot()]
    }

    /// Position of the inactive player.
    #[must_use]
    pub fn inactive_position(&self) -> Option<Coord> {
        self.positions[1 - self.active_slot()]
    }

    /// Position of `player`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn player_position(&self, player: PlayerId) -> BoardResult<Option<Coord>> {
        Ok(self.positions[slot(player)?])
    }

    /// Position of `player`'s opponent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn opponent_position(&self, player: PlayerId) -> BoardResult<Option<Coord>> {
        self.player_position(opponent(player)?)
    }

    /// Legal moves of the active player.
    #[must_use]
    pub fn active_moves(&self) -> Vec<Coord> {
        movegen::legal_moves(&self.grid, self.active_position())
    }

    /// Legal moves of the inactive player.
    #[must_use]
    pub fn inactive_moves(&self) -> Vec<Coord> {
        movegen::legal_moves(&self.grid, self.inactive_position())
    }

    /// Legal moves of `player`, whoever is to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn player_moves(&self, player: PlayerId) -> BoardResult<Vec<Coord>> {
        Ok(movegen::legal_moves(&self.grid, self.player_position(player)?))
    }

    /// Legal moves of `player`'s opponent.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnknownPlayer`] for anything but 1 or 2.
    pub fn opponent_moves(&self, player: PlayerId) -> BoardResult<Vec<Coord>> {
        self.player_moves(opponent(player)?)
    }

    /// Check signed coordinates against the board bounds.
    #[must_use]
    pub fn move_is_in_board(&self, col: i64, row: i64) -> bool {
        (0..i64::from(self.width())).contains(&col) && (0..i64::from(self.height())).contains(&row)
    }

    /// Check if a cell is on the board and blank.
    #[must_use]
    pub fn is_spot_open(&self, coord: Coord) -> bool {
        self.grid.is_blank(coord)
    }

    /// Check if a cell holds either queen.
    #[must_use]
    pub fn is_spot_queen(&self, coord: Coord) -> bool {
        matches!(self.grid.get(coord), Some(Cell::Occupied(_)))
    }

    /// Apply a move for the active player.
    ///
    /// The move must be one of [`Self::active_moves`]; legality is the
    /// caller's job and is not re-checked here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `to` is off the board. The
    /// state is unchanged in that case.
    pub fn apply_move(&mut self, to: Coord) -> BoardResult<MoveOutcome> {
        let mover = self.active;
        self.advance(mover, to)?;

        if movegen::has_legal_move(&self.grid, self.active_position()) {
            Ok(MoveOutcome::Continue)
        } else {
            Ok(MoveOutcome::Isolated { winner: mover })
        }
    }

    /// Apply a move to a copy of this state, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `to` is off the board.
    pub fn forecast_move(&self, to: Coord) -> BoardResult<(GameState, MoveOutcome)> {
        let mut next = self.clone();
        let outcome = next.apply_move(to)?;
        Ok((next, outcome))
    }

    /// Move `player` to `to` without any terminal check.
    ///
    /// Used to rebuild a recorded game; the turn passes to `player`'s
    /// opponent whoever was active before.
    pub(crate) fn replay_move(&mut self, player: PlayerId, to: Coord) -> BoardResult<()> {
        self.advance(player, to)
    }

    /// Vacate, run the variant hook, occupy, pass the turn.
    fn advance(&mut self, player: PlayerId, to: Coord) -> BoardResult<()> {
        if !self.grid.in_bounds(to) {
            return Err(BoardError::OutOfBounds(to));
        }
        let idx = slot(player)?;
        let next = opponent(player)?;

        if let Some(from) = self.positions[idx] {
            self.grid.set(from, Cell::Blocked);
            self.variant.after_vacate(&mut self.grid, from, to);
        }

        self.grid.set(to, Cell::Occupied(player));
        self.positions[idx] = Some(to);
        self.active = next;
        self.move_count += 1;
        Ok(())
    }

    /// Render the board, marking `legal_moves` as destinations.
    #[must_use]
    pub fn print_board(&self, legal_moves: &[Coord]) -> String {
        render_board(&self.grid, legal_moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(width: u16, height: u16, variant: Variant) -> GameState {
        GameState::new(width, height, Roster::new("Alpha", "Beta"), variant).unwrap()
    }

    #[test]
    fn test_new_game_state() {
        let state = board(9, 9, Variant::ImpactCrater);
        assert_eq!(state.width(), 9);
        assert_eq!(state.height(), 9);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.active_player(), QUEEN_ONE);
        assert_eq!(state.inactive_player(), QUEEN_TWO);
        assert_eq!(state.active_position(), None);
        assert_eq!(state.active_label(), "Alpha - Q1");
        assert_eq!(state.inactive_label(), "Beta - Q2");
        assert_eq!(state.variant_name(), "impact-crater");
    }

    #[test]
    fn test_invalid_dimensions() {
        let err = GameState::new(0, 4, Roster::default(), Variant::Classic).unwrap_err();
        assert_eq!(err, BoardError::InvalidDimensions { width: 0, height: 4 });
    }

    #[test]
    fn test_placement_scenario() {
        let mut state = board(5, 5, Variant::ImpactCrater);
        assert_eq!(state.active_moves().len(), 25);

        let outcome = state.apply_move(Coord::new(2, 2)).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(state.grid().get(Coord::new(2, 2)), Some(Cell::Occupied(QUEEN_ONE)));
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.active_player(), QUEEN_TWO);
        assert_eq!(state.active_moves().len(), 24);

        state.apply_move(Coord::new(0, 0)).unwrap();
        assert_eq!(state.grid().count_blocked(), 0);

        assert!(state.active_moves().contains(&Coord::new(3, 3)));
        state.apply_move(Coord::new(3, 3)).unwrap();
        assert_eq!(state.grid().get(Coord::new(2, 2)), Some(Cell::Blocked));
        assert_eq!(state.grid().get(Coord::new(3, 3)), Some(Cell::Occupied(QUEEN_ONE)));
        assert_eq!(state.grid().count_blocked(), 1);
        assert_eq!(state.move_count(), 3);
    }

    #[test]
    fn test_crater_scenario() {
        let mut state = board(5, 5, Variant::ImpactCrater);
        state.apply_move(Coord::new(1, 1)).unwrap();
        state.apply_move(Coord::new(4, 0)).unwrap();
        state.apply_move(Coord::new(1, 4)).unwrap();

        let grid = state.grid();
        assert_eq!(grid.get(Coord::new(1, 1)), Some(Cell::Blocked));
        assert_eq!(grid.get(Coord::new(0, 4)), Some(Cell::Blocked));
        assert_eq!(grid.get(Coord::new(1, 3)), Some(Cell::Blocked));
        assert_eq!(grid.get(Coord::new(2, 4)), Some(Cell::Blocked));
        assert_eq!(grid.get(Coord::new(1, 4)), Some(Cell::Occupied(QUEEN_ONE)));
        assert_eq!(grid.count_blocked(), 4);
    }

    #[test]
    fn test_classic_has_no_crater() {
        let mut state = board(5, 5, Variant::Classic);
        state.apply_move(Coord::new(1, 1)).unwrap();
        state.apply_move(Coord::new(4, 0)).unwrap();
        state.apply_move(Coord::new(1, 4)).unwrap();
        assert_eq!(state.grid().count_blocked(), 1);
    }

    #[test]
    fn test_forecast_leaves_original_untouched() {
        let mut state = board(5, 5, Variant::ImpactCrater);
        state.apply_move(Coord::new(0, 0)).unwrap();
        state.apply_move(Coord::new(4, 4)).unwrap();
        let before = state.get_state();

        let (next, outcome) = state.forecast_move(Coord::new(0, 3)).unwrap();
        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(state.get_state(), before);
        assert_eq!(state.move_count(), 2);
        assert_eq!(state.active_player(), QUEEN_ONE);
        assert_eq!(next.move_count(), 3);
        assert_eq!(next.active_player(), QUEEN_TWO);
        assert_eq!(next.grid().get(Coord::new(0, 0)), Some(Cell::Blocked));
    }

    #[test]
    fn test_isolation_ends_game() {
        use Cell::{Blank as B, Blocked as X, Occupied as Q};
        let mut state = board(3, 3, Variant::Classic);
        let grid = Grid::from_rows(&[
            vec![Q(2), X, B],
            vec![B, X, B],
            vec![Q(1), X, B],
        ])
        .unwrap();
        state.set_state(grid, true).unwrap();
        assert_eq!(state.active_moves(), vec![Coord::new(0, 1)]);
        assert_eq!(state.inactive_moves(), vec![Coord::new(0, 1)]);

        let outcome = state.apply_move(Coord::new(0, 1)).unwrap();
        assert_eq!(outcome, MoveOutcome::Isolated { winner: QUEEN_ONE });
        assert!(outcome.is_over());
        assert_eq!(outcome.winner(), Some(QUEEN_ONE));
        assert!(state.active_moves().is_empty());
        assert_eq!(state.grid().get(Coord::new(0, 2)), Some(Cell::Blocked));
    }

    #[test]
    fn test_set_state_recovers_positions_and_count() {
        use Cell::{Blank as B, Blocked as X, Occupied as Q};
        let mut state = board(4, 4, Variant::ImpactCrater);
        let grid = Grid::from_rows(&[
            vec![B, X, B, B],
            vec![B, Q(1), X, B],
            vec![X, B, B, Q(2)],
            vec![B, B, B, B],
        ])
        .unwrap();
        state.set_state(grid, false).unwrap();

        assert_eq!(state.player_position(QUEEN_ONE), Ok(Some(Coord::new(1, 1))));
        assert_eq!(state.player_position(QUEEN_TWO), Ok(Some(Coord::new(3, 2))));
        assert_eq!(state.move_count(), 5);
        assert_eq!(state.active_player(), QUEEN_TWO);
        assert_eq!(state.active_position(), Some(Coord::new(3, 2)));
    }

    #[test]
    fn test_set_state_without_queens() {
        let mut state = board(4, 4, Variant::Classic);
        state.apply_move(Coord::new(1, 1)).unwrap();
        state.set_state(Grid::new(6, 3).unwrap(), true).unwrap();
        assert_eq!(state.active_position(), None);
        assert_eq!(state.inactive_position(), None);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.width(), 6);
        assert_eq!(state.active_moves().len(), 18);
    }

    #[test]
    fn test_set_state_rejects_duplicate_queen() {
        let mut state = board(4, 4, Variant::Classic);
        state.apply_move(Coord::new(1, 1)).unwrap();
        let before = state.clone();

        let mut grid = Grid::new(4, 4).unwrap();
        grid.set(Coord::new(0, 0), Cell::Occupied(QUEEN_ONE));
        grid.set(Coord::new(3, 2), Cell::Occupied(QUEEN_ONE));
        let err = state.set_state(grid, true).unwrap_err();

        assert_eq!(
            err,
            BoardError::DuplicateQueen {
                player: QUEEN_ONE,
                first: Coord::new(0, 0),
                second: Coord::new(3, 2),
            }
        );
        assert_eq!(state.get_state(), before.get_state());
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.player_position(QUEEN_ONE), Ok(Some(Coord::new(1, 1))));
    }

    #[test]
    fn test_set_state_rejects_unknown_player() {
        let mut state = board(3, 3, Variant::Classic);
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set(Coord::new(2, 1), Cell::Occupied(7));

        assert_eq!(state.set_state(grid, false), Err(BoardError::UnknownPlayer(7)));
        assert_eq!(state.grid().count_occupied(), 0);
        assert_eq!(state.active_player(), QUEEN_ONE);
    }

    #[test]
    fn test_player_queries() {
        let mut state = board(5, 5, Variant::Classic);
        state.apply_move(Coord::new(0, 0)).unwrap();
        state.apply_move(Coord::new(4, 4)).unwrap();

        assert_eq!(state.player_position(QUEEN_ONE), Ok(Some(Coord::new(0, 0))));
        assert_eq!(state.opponent_position(QUEEN_ONE), Ok(Some(Coord::new(4, 4))));
        assert_eq!(state.player_moves(QUEEN_TWO).unwrap(), state.inactive_moves());
        assert_eq!(state.opponent_moves(QUEEN_TWO).unwrap(), state.active_moves());
        assert_eq!(state.label(QUEEN_TWO), Ok("Beta - Q2"));

        assert_eq!(state.player_position(3), Err(BoardError::UnknownPlayer(3)));
        assert!(state.opponent_position(0).is_err());
        assert!(state.player_moves(5).is_err());
        assert!(state.opponent_moves(5).is_err());
        assert!(state.label(0).is_err());
    }

    #[test]
    fn test_spot_checks() {
        let mut state = board(3, 2, Variant::Classic);
        state.apply_move(Coord::new(1, 1)).unwrap();
        assert!(state.move_is_in_board(2, 1));
        assert!(!state.move_is_in_board(3, 1));
        assert!(!state.move_is_in_board(-1, 0));
        assert!(!state.move_is_in_board(0, 2));
        assert!(state.is_spot_open(Coord::new(0, 0)));
        assert!(!state.is_spot_open(Coord::new(1, 1)));
        assert!(!state.is_spot_open(Coord::new(5, 5)));
        assert!(state.is_spot_queen(Coord::new(1, 1)));
        assert!(!state.is_spot_queen(Coord::new(0, 1)));
    }

    #[test]
    fn test_out_of_bounds_move_is_rejected_without_mutation() {
        let mut state = board(3, 3, Variant::Classic);
        state.apply_move(Coord::new(0, 0)).unwrap();
        let before = state.get_state();
        let err = state.apply_move(Coord::new(3, 0)).unwrap_err();
        assert_eq!(err, BoardError::OutOfBounds(Coord::new(3, 0)));
        assert_eq!(state.get_state(), before);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.active_player(), QUEEN_TWO);
    }

    #[test]
    fn test_fresh_keeps_roster_and_dimensions() {
        let mut state = board(6, 4, Variant::Classic);
        state.apply_move(Coord::new(2, 2)).unwrap();
        let fresh = state.fresh();
        assert_eq!(fresh.width(), 6);
        assert_eq!(fresh.height(), 4);
        assert_eq!(fresh.move_count(), 0);
        assert_eq!(fresh.active_label(), "Alpha - Q1");
        assert_eq!(fresh.variant_name(), "classic");
        assert_eq!(fresh.grid().count_occupied(), 0);
    }
}
