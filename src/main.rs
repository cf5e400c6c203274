//! Isolation CLI - Command-line interface for playing isolation games.

#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Isolation - two queens, one board, last one with a move wins
#[derive(Parser, Debug)]
#[command(name = "isolation")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a single game between two reference agents
    Run {
        /// Agent playing queen one (moves first)
        #[arg(long, default_value = "greedy")]
        first: cli::AgentKind,

        /// Agent playing queen two
        #[arg(long, default_value = "random")]
        second: cli::AgentKind,

        #[command(flatten)]
        board: cli::BoardArgs,

        /// Seed for random agents (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text, json, or transcript
        #[arg(short, long, default_value = "text")]
        format: cli::RunFormat,
    },

    /// Run many games in parallel and aggregate statistics
    Series {
        /// First entrant
        #[arg(long, default_value = "greedy")]
        first: cli::AgentKind,

        /// Second entrant
        #[arg(long, default_value = "random")]
        second: cli::AgentKind,

        #[command(flatten)]
        board: cli::BoardArgs,

        /// Number of games to run (default: 100)
        #[arg(short, long, default_value = "100")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Keep seats fixed instead of alternating who moves first
        #[arg(long)]
        fixed_seats: bool,

        /// Output format: text, json, or csv
        #[arg(short, long, default_value = "text")]
        format: cli::SeriesFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        Commands::Run {
            first,
            second,
            board,
            seed,
            format,
        } => cli::run::execute(first, second, board, seed, format),

        Commands::Series {
            first,
            second,
            board,
            games,
            seed,
            threads,
            fixed_seats,
            format,
            progress,
        } => cli::series::execute(
            first,
            second,
            board,
            games,
            seed,
            threads,
            !fixed_seats,
            format,
            progress,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
