//! Uniform random agent.
//!
//! Picks uniformly from the legal moves. Seeded, so a game between two
//! random agents is reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::agent::Agent;
use crate::game::{Coord, GameState};
use crate::timer::TimeLeft;

/// Agent that plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Create an agent with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> String {
        "RandomAgent".to_string()
    }

    fn select_move(&mut self, board: GameState, _time_left: &TimeLeft<'_>) -> Option<Coord> {
        let moves = board.active_moves();
        moves.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Roster, Variant};
    use crate::timer::WallClock;

    #[test]
    fn test_random_agent_plays_legal_moves() {
        let clock = WallClock::new();
        let mut state = GameState::new(5, 5, Roster::default(), Variant::ImpactCrater).unwrap();
        let mut agents = [RandomAgent::new(1), RandomAgent::new(2)];

        for ply in 0..6 {
            let time_left = TimeLeft::start(&clock, 0);
            let Some(mv) = agents[ply % 2].select_move(state.clone(), &time_left) else {
                break;
            };
            assert!(state.active_moves().contains(&mv));
            if state.apply_move(mv).unwrap().is_over() {
                break;
            }
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let clock = WallClock::new();
        let state = GameState::new(7, 7, Roster::default(), Variant::Classic).unwrap();
        let time_left = TimeLeft::start(&clock, 0);
        let a = RandomAgent::new(42).select_move(state.clone(), &time_left);
        let b = RandomAgent::new(42).select_move(state, &time_left);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_moves_returns_none() {
        let clock = WallClock::new();
        let mut state = GameState::new(1, 1, Roster::default(), Variant::Classic).unwrap();
        state.apply_move(Coord::new(0, 0)).unwrap();
        let time_left = TimeLeft::start(&clock, 0);
        assert_eq!(RandomAgent::new(0).select_move(state, &time_left), None);
    }
}
