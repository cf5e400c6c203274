//! Parallel series of games between two agent kinds.

use rayon::prelude::*;
use serde::Serialize;
use tracing::info;

use super::{Game, GameResult, MatchConfig, Termination, TournamentError};
use crate::agent::Agent;
use crate::game::{GameState, QUEEN_ONE, Roster};

/// Configuration for a series of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesConfig {
    /// Number of games to play.
    pub games: u64,
    /// Seed for game 0; game `i` uses `base_seed + i`.
    pub base_seed: u64,
    /// Swap seats on odd games so neither entrant always moves first.
    pub alternate_seats: bool,
    /// Settings for each game.
    pub match_config: MatchConfig,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            games: 100,
            base_seed: 0,
            alternate_seats: true,
            match_config: MatchConfig::default(),
        }
    }
}

/// Aggregated series results.
///
/// Entrant 0 is the first factory, entrant 1 the second, whichever seat
/// they played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeriesStats {
    /// Games completed.
    pub games_played: u64,
    /// Wins per entrant.
    pub wins: [u64; 2],
    /// Wins by the queen that moved first.
    pub first_mover_wins: u64,
    /// Games ended by a timeout.
    pub timeouts: u64,
    /// Games ended by an illegal or missing move.
    pub illegal_moves: u64,
    /// Games ended by isolation.
    pub isolations: u64,
    /// Plies summed over all games.
    pub total_plies: u64,
}

impl SeriesStats {
    /// Record one game. `swapped` means entrant 1 played queen one.
    pub fn add_result(&mut self, result: &GameResult, swapped: bool) {
        self.games_played += 1;
        let first_won = result.winner == QUEEN_ONE;
        if first_won {
            self.first_mover_wins += 1;
        }
        let entrant = usize::from(first_won == swapped);
        self.wins[entrant] += 1;

        match result.termination {
            Termination::TimedOut => self.timeouts += 1,
            Termination::IllegalMove => self.illegal_moves += 1,
            Termination::NoLegalMoves => self.isolations += 1,
        }
        self.total_plies += result.history.ply_count() as u64;
    }

    /// Merge another stats accumulator into this one.
    pub fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.wins[0] += other.wins[0];
        self.wins[1] += other.wins[1];
        self.first_mover_wins += other.first_mover_wins;
        self.timeouts += other.timeouts;
        self.illegal_moves += other.illegal_moves;
        self.isolations += other.isolations;
        self.total_plies += other.total_plies;
    }

    /// Fraction of games won by `entrant` (0 or 1).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self, entrant: usize) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.wins.get(entrant).copied().unwrap_or(0) as f64 / self.games_played as f64
    }

    /// Mean plies per game.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_plies(&self) -> f64 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.total_plies as f64 / self.games_played as f64
    }
}

/// Play `config.games` games in parallel.
///
/// Each game builds fresh agents from the factories, passing a per-game
/// seed, so the series is reproducible for seeded agents.
///
/// # Errors
///
/// Returns [`TournamentError::NoGames`] for an empty series and
/// [`TournamentError::Board`] for invalid board dimensions.
pub fn run_series<A, B>(
    first: A,
    second: B,
    config: &SeriesConfig,
) -> Result<SeriesStats, TournamentError>
where
    A: Fn(u64) -> Box<dyn Agent> + Sync,
    B: Fn(u64) -> Box<dyn Agent> + Sync,
{
    if config.games == 0 {
        return Err(TournamentError::NoGames);
    }
    let match_config = config.match_config;
    // Reject bad dimensions once instead of failing every game
    GameState::new(
        match_config.width,
        match_config.height,
        Roster::default(),
        match_config.variant,
    )?;

    info!(games = config.games, base_seed = config.base_seed, "series started");

    // Each thread accumulates into its own SeriesStats, merged at the end
    let stats = (0..config.games)
        .into_par_iter()
        .fold(SeriesStats::default, |mut local, i| {
            let seed = config.base_seed.wrapping_add(i);
            let a = first(seed.wrapping_mul(2));
            let b = second(seed.wrapping_mul(2).wrapping_add(1));
            let swapped = config.alternate_seats && i % 2 == 1;
            let (q1, q2) = if swapped { (b, a) } else { (a, b) };

            if let Ok(mut game) = Game::new(q1, q2, &match_config) {
                local.add_result(&game.play(), swapped);
            }
            local
        })
        .reduce(SeriesStats::default, |mut a, b| {
            a.merge(&b);
            a
        });

    info!(
        games = stats.games_played,
        first_wins = stats.wins[0],
        second_wins = stats.wins[1],
        "series finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{GreedyAgent, RandomAgent};
    use crate::game::Variant;
    use crate::tournament::MoveHistory;

    fn small_series(games: u64) -> SeriesConfig {
        SeriesConfig {
            games,
            base_seed: 7,
            alternate_seats: true,
            match_config: MatchConfig {
                width: 5,
                height: 5,
                time_limit_ms: 0,
                variant: Variant::ImpactCrater,
            },
        }
    }

    fn result(winner: u8, termination: Termination) -> GameResult {
        GameResult {
            winner,
            winner_label: String::new(),
            loser: 3 - winner,
            termination,
            reason: String::new(),
            history: MoveHistory::new(),
            move_count: 0,
        }
    }

    #[test]
    fn test_add_result_tracks_entrants_across_seats() {
        let mut stats = SeriesStats::default();
        stats.add_result(&result(1, Termination::NoLegalMoves), false);
        stats.add_result(&result(1, Termination::TimedOut), true);
        stats.add_result(&result(2, Termination::IllegalMove), true);

        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.wins, [2, 1]);
        assert_eq!(stats.first_mover_wins, 2);
        assert_eq!(stats.isolations, 1);
        assert_eq!(stats.timeouts, 1);
        assert_eq!(stats.illegal_moves, 1);
    }

    #[test]
    fn test_merge_sums_fields() {
        let mut a = SeriesStats::default();
        a.add_result(&result(1, Termination::NoLegalMoves), false);
        let mut b = SeriesStats::default();
        b.add_result(&result(2, Termination::NoLegalMoves), false);
        a.merge(&b);
        assert_eq!(a.games_played, 2);
        assert_eq!(a.wins, [1, 1]);
        assert!((a.win_rate(0) - 0.5).abs() < f64::EPSILON);
        assert!((SeriesStats::default().average_plies()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_series_plays_every_game() {
        let stats = run_series(
            |seed| Box::new(RandomAgent::new(seed)),
            |_| Box::new(GreedyAgent::default()),
            &small_series(8),
        )
        .unwrap();
        assert_eq!(stats.games_played, 8);
        assert_eq!(stats.wins[0] + stats.wins[1], 8);
        assert_eq!(stats.isolations, 8);
        assert!(stats.average_plies() >= 2.0);
    }

    #[test]
    fn test_series_is_reproducible() {
        let run = || {
            run_series(
                |seed| Box::new(RandomAgent::new(seed)),
                |seed| Box::new(RandomAgent::new(seed)),
                &small_series(6),
            )
            .unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_zero_games_rejected() {
        let err = run_series(
            |seed| Box::new(RandomAgent::new(seed)),
            |seed| Box::new(RandomAgent::new(seed)),
            &small_series(0),
        )
        .unwrap_err();
        assert_eq!(err, TournamentError::NoGames);
    }
}
