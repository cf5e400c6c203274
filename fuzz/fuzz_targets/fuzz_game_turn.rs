#![no_main]

//! Move sequence fuzzer.
//!
//! Applies arbitrary moves to a small board and checks the board invariants
//! after every one:
//! 1. Off-board moves must be rejected without touching the board
//! 2. Legal moves must keep exactly one cell per moved queen
//! 3. Forecasting must never mutate the source board
//! 4. Move counts must only grow

use arbitrary::Arbitrary;
use isolation::game::{Coord, GameState, Roster, Variant, check_invariants};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated move.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzMove {
    /// Play the n-th legal move (modulo the number of legal moves).
    Legal(u8),
    /// Play any coordinate, possibly illegal or off the board.
    Raw { col: u8, row: u8 },
}

/// Structured input for move sequence fuzzing.
#[derive(Arbitrary, Debug)]
struct GameTurnInput {
    /// Board width (capped to 1..=9).
    width: u8,
    /// Board height (capped to 1..=9).
    height: u8,
    /// Use the impact-crater rule instead of the classic one.
    crater: bool,
    /// Moves to apply in order.
    moves: Vec<FuzzMove>,
}

fuzz_target!(|input: GameTurnInput| {
    let width = u16::from(input.width % 9) + 1;
    let height = u16::from(input.height % 9) + 1;
    let variant = if input.crater {
        Variant::ImpactCrater
    } else {
        Variant::Classic
    };

    let Ok(mut state) = GameState::new(width, height, Roster::default(), variant) else {
        return;
    };

    for mv in input.moves.into_iter().take(64) {
        let legal = state.active_moves();
        let to = match mv {
            FuzzMove::Legal(n) => {
                if legal.is_empty() {
                    break;
                }
                legal[usize::from(n) % legal.len()]
            }
            FuzzMove::Raw { col, row } => Coord::new(u16::from(col), u16::from(row)),
        };

        // Only legal moves keep the queen-placement invariants meaningful
        if !legal.contains(&to) {
            if !state.grid().in_bounds(to) {
                let before = state.get_state();
                assert!(state.apply_move(to).is_err());
                assert_eq!(state.get_state(), before);
            }
            continue;
        }

        let snapshot = state.clone();
        let (forecast, _) = state.forecast_move(to).unwrap();
        assert_eq!(state.get_state(), snapshot.get_state());

        let count = state.move_count();
        let outcome = state.apply_move(to).unwrap();
        assert_eq!(state.get_state(), forecast.get_state());
        assert_eq!(state.move_count(), count + 1);

        let violations = check_invariants(&state);
        assert!(violations.is_empty(), "Invariant violations: {violations:?}");

        if outcome.is_over() {
            break;
        }
    }
});
