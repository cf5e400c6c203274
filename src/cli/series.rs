//! Series command implementation.

use super::output::{JsonSeriesResult, format_series_csv, format_series_text};
use super::{AgentKind, BoardArgs, CliError, SeriesFormat, seed_or_now};
use indicatif::{ProgressBar, ProgressStyle};
use isolation::Agent;
use isolation::tournament::{SeriesConfig, run_series};
use std::time::Instant;

/// Execute the series command.
///
/// # Errors
///
/// Returns an error if the series cannot be run.
#[allow(clippy::too_many_arguments)]
pub(crate) fn execute(
    first: AgentKind,
    second: AgentKind,
    board: BoardArgs,
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    alternate_seats: bool,
    format: SeriesFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let config = SeriesConfig {
        games,
        base_seed: seed_or_now(seed),
        alternate_seats,
        match_config: board.match_config(),
    };
    let names = vec![first.build(0).name(), second.build(0).name()];

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(games);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let stats = run_series(|seed| first.build(seed), |seed| second.build(seed), &config)?;

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    #[allow(clippy::cast_precision_loss)]
    let games_per_sec = if duration.as_secs_f64() > 0.0 {
        stats.games_played as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    match format {
        SeriesFormat::Text => {
            println!();
            print!("{}", format_series_text(&stats, &names));
            println!();
            println!("Duration: {:.2}s ({games_per_sec:.0} games/sec)", duration.as_secs_f64());
        }
        SeriesFormat::Json => {
            let json_result = JsonSeriesResult::from_stats(&stats, &names);
            let json = serde_json::to_string_pretty(&json_result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
        SeriesFormat::Csv => {
            print!("{}", format_series_csv(&stats, &names));
        }
    }

    Ok(())
}
