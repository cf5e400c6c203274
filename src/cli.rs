//! CLI command implementations for Isolation.

pub(crate) mod run;
pub(crate) mod series;

mod output;

use clap::{Args, ValueEnum};
use isolation::Variant;
use isolation::agent::{Agent, GreedyAgent, RandomAgent};
use isolation::tournament::{DEFAULT_TIME_LIMIT_MS, MatchConfig, TournamentError};
use std::error::Error;
use std::fmt;

/// Reference agent selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AgentKind {
    /// Uniformly random legal moves.
    Random,
    /// One-ply mobility lookahead.
    Greedy,
}

impl AgentKind {
    /// Build a fresh agent; `seed` only matters for random agents.
    pub(crate) fn build(self, seed: u64) -> Box<dyn Agent> {
        match self {
            AgentKind::Random => Box::new(RandomAgent::new(seed)),
            AgentKind::Greedy => Box::new(GreedyAgent::default()),
        }
    }
}

/// Rule variant selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum VariantArg {
    /// Long moves crater the landing cell's neighbours.
    Crater,
    /// Plain isolation.
    Classic,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Crater => Variant::ImpactCrater,
            VariantArg::Classic => Variant::Classic,
        }
    }
}

/// Board and timing flags shared by every command.
#[derive(Debug, Clone, Copy, Args)]
pub(crate) struct BoardArgs {
    /// Board width (default: 9)
    #[arg(long, default_value = "9")]
    width: u16,

    /// Board height (default: 9)
    #[arg(long, default_value = "9")]
    height: u16,

    /// Per-move time limit in milliseconds, 0 for none
    #[arg(short = 't', long, default_value_t = DEFAULT_TIME_LIMIT_MS)]
    time_limit: u64,

    /// Rule variant: crater or classic
    #[arg(long, default_value = "crater")]
    variant: VariantArg,
}

impl BoardArgs {
    /// Convert the flags into a match configuration.
    pub(crate) fn match_config(self) -> MatchConfig {
        MatchConfig {
            width: self.width,
            height: self.height,
            time_limit_ms: self.time_limit,
            variant: self.variant.into(),
        }
    }
}

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum RunFormat {
    /// Human-readable summary.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// Board-by-board transcript of the game.
    Transcript,
}

/// Output format for the `series` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SeriesFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
    /// CSV format.
    Csv,
}

/// Seed from the clock when none was given.
pub(crate) fn seed_or_now(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() ^ u64::from(d.subsec_nanos()))
            .unwrap_or(42)
    })
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<TournamentError> for CliError {
    fn from(e: TournamentError) -> Self {
        Self::new(e.to_string())
    }
}
