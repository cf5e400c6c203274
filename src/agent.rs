//! Agent abstraction.
//!
//! An agent is anything that can pick a move for the side to move. The
//! driver hands it an owned copy of the board, so an agent may forecast
//! and mutate freely without affecting the real game.

mod greedy;
mod random;

pub use greedy::GreedyAgent;
pub use random::RandomAgent;

use crate::game::{Coord, GameState};
use crate::timer::TimeLeft;

/// Move-selection capability.
pub trait Agent: Send {
    /// Display name, used to build queen labels.
    ///
    /// Defaults to the implementing type's name without its module path.
    fn name(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }

    /// Choose a move for `board.active_player()`.
    ///
    /// Returning `None` (or any move not in `board.active_moves()`) forfeits
    /// the game. So does returning after `time_left.millis()` reaches zero.
    fn select_move(&mut self, board: GameState, time_left: &TimeLeft<'_>) -> Option<Coord>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn name(&self) -> String {
        (**self).name()
    }

    fn select_move(&mut self, board: GameState, time_left: &TimeLeft<'_>) -> Option<Coord> {
        (**self).select_move(board, time_left)
    }
}

/// Strip the module path from a type name.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Pass;

    impl Agent for Pass {
        fn select_move(&mut self, _board: GameState, _time_left: &TimeLeft<'_>) -> Option<Coord> {
            None
        }
    }

    #[test]
    fn test_default_name_is_short_type_name() {
        assert_eq!(Pass.name(), "Pass");
        let boxed: Box<dyn Agent> = Box::new(Pass);
        assert_eq!(boxed.name(), "Pass");
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name("isolation::agent::GreedyAgent"), "GreedyAgent");
        assert_eq!(short_type_name("Plain"), "Plain");
        assert_eq!(short_type_name("a::Wrapper<b::Inner>"), "Wrapper");
    }
}
