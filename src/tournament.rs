//! Turn driver for isolation games.
//!
//! Provides a pure function interface: `(agents, config) -> GameResult`
//!
//! The driver handles:
//! - Handing each agent an isolated copy of the board
//! - Advisory per-move time limits (measured after the agent returns)
//! - Forfeits for timeouts and illegal moves
//! - Move history recording
//! - Parallel series of games with rayon

mod series;

pub use series::{SeriesConfig, SeriesStats, run_series};

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::agent::Agent;
use crate::error::BoardError;
use crate::game::{
    Coord, DEFAULT_HEIGHT, DEFAULT_WIDTH, GameState, Grid, PlayerId, QUEEN_ONE, QUEEN_TWO, Roster,
    Variant, assert_invariants, opponent,
};
use crate::timer::{Clock, TimeLeft, WallClock};

/// Default per-move time limit in milliseconds.
pub const DEFAULT_TIME_LIMIT_MS: u64 = 10_000;

/// Configuration for a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    /// Board width.
    pub width: u16,
    /// Board height.
    pub height: u16,
    /// Per-move time limit in milliseconds; zero disables the check.
    pub time_limit_ms: u64,
    /// Rule variant.
    pub variant: Variant,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            time_limit_ms: DEFAULT_TIME_LIMIT_MS,
            variant: Variant::ImpactCrater,
        }
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Termination {
    /// The loser returned after its time ran out.
    TimedOut,
    /// The loser returned no move or a move outside its legal set.
    IllegalMove,
    /// The loser had no legal move on its turn.
    NoLegalMoves,
}

impl Termination {
    /// Human-readable reason naming the losing queen.
    #[must_use]
    pub fn describe(self, loser_label: &str) -> String {
        match self {
            Termination::TimedOut => format!("{loser_label} timed out."),
            Termination::IllegalMove => format!("{loser_label} made an illegal move."),
            Termination::NoLegalMoves => format!("{loser_label} has no legal moves left."),
        }
    }

    /// Whether the game ended by forfeit rather than isolation.
    #[must_use]
    pub const fn is_forfeit(self) -> bool {
        !matches!(self, Termination::NoLegalMoves)
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::TimedOut => write!(f, "timed out"),
            Termination::IllegalMove => write!(f, "illegal move"),
            Termination::NoLegalMoves => write!(f, "opponent has no legal moves"),
        }
    }
}

/// One agent response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ply {
    /// Who moved.
    pub player: PlayerId,
    /// Where to; `None` if the agent returned no move.
    pub to: Option<Coord>,
}

/// A round of play: queen one's ply followed by queen two's.
///
/// The last round is partial if the game ended after queen one's ply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Round {
    /// Plies in the order they were made.
    pub plies: Vec<Ply>,
}

/// Ordered record of every agent response in a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MoveHistory {
    rounds: Vec<Round>,
}

impl MoveHistory {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a ply. Queen one always opens a new round.
    pub fn record(&mut self, player: PlayerId, to: Option<Coord>) {
        let ply = Ply { player, to };
        match self.rounds.last_mut() {
            Some(round) if player != QUEEN_ONE && round.plies.len() < 2 => round.plies.push(ply),
            _ => self.rounds.push(Round { plies: vec![ply] }),
        }
    }

    /// All rounds in order.
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// All plies in order.
    #[must_use]
    pub fn plies(&self) -> impl Iterator<Item = &Ply> + '_ {
        self.rounds.iter().flat_map(|round| round.plies.iter())
    }

    /// Number of plies recorded.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.rounds.iter().map(|round| round.plies.len()).sum()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

/// Final result of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameResult {
    /// Winning player.
    pub winner: PlayerId,
    /// Winning queen's label.
    pub winner_label: String,
    /// Losing player.
    pub loser: PlayerId,
    /// How the game ended.
    pub termination: Termination,
    /// Human-readable reason, e.g. `"RandomAgent - Q2 timed out."`.
    pub reason: String,
    /// Every ply, including the one that forfeited.
    pub history: MoveHistory,
    /// Moves applied to the board.
    pub move_count: u32,
}

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are still being requested.
    Running,
    /// The game is decided; the board is frozen.
    GameOver {
        /// Winning player.
        winner: PlayerId,
        /// How the game ended.
        termination: Termination,
    },
}

/// Error type for driver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TournamentError {
    /// The board could not be built.
    Board(BoardError),
    /// A series needs at least one game.
    NoGames,
}

impl fmt::Display for TournamentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "Board setup failed: {e}"),
            Self::NoGames => write!(f, "A series needs at least one game"),
        }
    }
}

impl std::error::Error for TournamentError {}

impl From<BoardError> for TournamentError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

/// A game between two agents on an authoritative board.
///
/// Agents never see the authoritative board: each call to
/// [`Agent::select_move`] receives a fresh clone.
pub struct Game {
    /// Authoritative state.
    state: GameState,
    /// Agents by seat (queen one, queen two).
    agents: [Box<dyn Agent>; 2],
    /// Every ply so far.
    history: MoveHistory,
    /// Per-move time limit in milliseconds (zero = none).
    time_limit_ms: u64,
    /// Time source for the limit.
    clock: Box<dyn Clock>,
    /// Set once the game is over; the state is frozen from then on.
    result: Option<GameResult>,
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("history", &self.history)
            .field("time_limit_ms", &self.time_limit_ms)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Set up a new game; `first` plays queen one and moves first.
    ///
    /// # Errors
    ///
    /// Returns [`TournamentError::Board`] if the board dimensions are invalid.
    pub fn new(
        first: Box<dyn Agent>,
        second: Box<dyn Agent>,
        config: &MatchConfig,
    ) -> Result<Self, TournamentError> {
        let roster = Roster::new(&first.name(), &second.name());
        let state = GameState::new(config.width, config.height, roster, config.variant)?;

        Ok(Self {
            state,
            agents: [first, second],
            history: MoveHistory::new(),
            time_limit_ms: config.time_limit_ms,
            clock: Box::new(WallClock::new()),
            result: None,
        })
    }

    /// Replace the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The authoritative board.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Copy of the physical board.
    #[must_use]
    pub fn get_state(&self) -> Grid {
        self.state.get_state()
    }

    /// Inject a board position before or during play.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] if the board holds an unknown player or a
    /// queen on more than one cell; the game is unchanged in that case.
    pub fn set_state(&mut self, grid: Grid, queen_one_to_move: bool) -> Result<(), BoardError> {
        self.state.set_state(grid, queen_one_to_move)
    }

    /// Plies recorded so far.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// The result, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Check if the game is over.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.result
            .as_ref()
            .map_or(GameStatus::Running, |result| GameStatus::GameOver {
                winner: result.winner,
                termination: result.termination,
            })
    }

    /// Play until the game ends.
    pub fn play(&mut self) -> GameResult {
        info!(
            queen_one = self.state.label(QUEEN_ONE).unwrap_or_default(),
            queen_two = self.state.label(QUEEN_TWO).unwrap_or_default(),
            width = self.state.width(),
            height = self.state.height(),
            variant = self.state.variant_name(),
            time_limit_ms = self.time_limit_ms,
            "game started"
        );
        loop {
            if let Some(result) = self.step() {
                return result;
            }
        }
    }

    /// Ask the active agent for one move and apply it.
    ///
    /// Returns the result once the game is over (and on every later call).
    pub fn step(&mut self) -> Option<GameResult> {
        if let Some(result) = &self.result {
            return Some(result.clone());
        }

        let mover = self.state.active_player();
        let seat = usize::from(mover == QUEEN_TWO);
        let time_left = TimeLeft::start(self.clock.as_ref(), self.time_limit_ms);
        let choice = self.agents[seat].select_move(self.state.clone(), &time_left);
        self.history.record(mover, choice);

        debug!(
            player = mover,
            to = ?choice,
            elapsed = ?time_left.elapsed(),
            "agent returned"
        );

        let termination = if time_left.expired() {
            Some(Termination::TimedOut)
        } else {
            match choice {
                Some(mv) if self.state.active_moves().contains(&mv) => {
                    match self.state.apply_move(mv) {
                        Ok(outcome) => {
                            assert_invariants(&self.state);
                            outcome.is_over().then_some(Termination::NoLegalMoves)
                        }
                        Err(_) => Some(Termination::IllegalMove),
                    }
                }
                _ => Some(Termination::IllegalMove),
            }
        };

        termination.map(|termination| self.finish(mover, termination))
    }

    /// Freeze the game with `mover`'s last ply deciding it.
    fn finish(&mut self, mover: PlayerId, termination: Termination) -> GameResult {
        let other = opponent(mover).unwrap_or(QUEEN_ONE);
        let (winner, loser) = if termination.is_forfeit() {
            (other, mover)
        } else {
            (mover, other)
        };
        let winner_label = self.state.label(winner).unwrap_or_default().to_string();
        let reason = termination.describe(self.state.label(loser).unwrap_or_default());

        if termination.is_forfeit() {
            warn!(player = loser, %termination, "forfeit");
        }
        info!(winner = %winner_label, %reason, moves = self.state.move_count(), "game over");

        let result = GameResult {
            winner,
            winner_label,
            loser,
            termination,
            reason,
            history: self.history.clone(),
            move_count: self.state.move_count(),
        };
        self.result = Some(result.clone());
        result
    }
}

/// Run a complete game between two agents.
///
/// `first` plays queen one and moves first.
///
/// # Errors
///
/// Returns [`TournamentError::Board`] if the board dimensions are invalid.
pub fn run_game(
    first: Box<dyn Agent>,
    second: Box<dyn Agent>,
    config: &MatchConfig,
) -> Result<GameResult, TournamentError> {
    let mut game = Game::new(first, second, config)?;
    Ok(game.play())
}
