//! Run command implementation.

use super::output::{JsonGameResult, format_text};
use super::{AgentKind, BoardArgs, CliError, RunFormat, seed_or_now};
use isolation::replay::render_transcript;
use isolation::tournament::Game;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the board cannot be set up.
pub(crate) fn execute(
    first: AgentKind,
    second: AgentKind,
    board: BoardArgs,
    seed: Option<u64>,
    format: RunFormat,
) -> Result<(), CliError> {
    let seed = seed_or_now(seed);
    let config = board.match_config();

    let mut game = Game::new(
        first.build(seed),
        second.build(seed.wrapping_add(1)),
        &config,
    )?;
    let result = game.play();
    let state = game.state();

    match format {
        RunFormat::Text => {
            print!("{}", format_text(&result, seed, &state.print_board(&[])));
        }
        RunFormat::Json => {
            let json_result = JsonGameResult::from_game_result(&result, seed, state.variant_name());
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        RunFormat::Transcript => {
            println!(
                "{}",
                render_transcript(&result.winner_label, &result.history, &result.reason, state)
            );
        }
    }

    Ok(())
}
