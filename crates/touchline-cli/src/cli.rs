//! CLI argument definitions for the touchline loader.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "touchline",
    version,
    about = "Touchline - Load vendor soccer feeds into canonical datasets",
    long_about = "Load SecondSpectrum Insight event feeds and raw tracking feeds\n\
                  into canonical, vendor-neutral datasets.\n\n\
                  Datasets can be written as JSON or summarized on the terminal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load an event feed and its metadata document.
    Events(EventsArgs),

    /// Load a raw tracking feed and its metadata document.
    Tracking(TrackingArgs),
}

#[derive(Parser)]
pub struct EventsArgs {
    /// Path to the Insight event feed (newline-delimited JSON).
    #[arg(value_name = "EVENTS")]
    pub events: PathBuf,

    /// Path to the match metadata document.
    #[arg(value_name = "META")]
    pub meta: PathBuf,

    /// Target coordinate system for every location in the dataset.
    #[arg(long = "coordinates", value_enum, default_value = "provider")]
    pub coordinates: CoordinatesArg,

    /// Keep only events of this kind; repeat for several kinds.
    #[arg(long = "event-type", value_name = "KIND")]
    pub event_types: Vec<String>,

    /// Skip metadata format detection and assert the named format.
    #[arg(long = "meta-format", value_name = "FORMAT")]
    pub meta_format: Option<String>,

    /// Skip feed dialect detection and assert the named dialect.
    #[arg(long = "feed", value_name = "DIALECT")]
    pub feed: Option<String>,

    /// Write the dataset as JSON to this path ("-" for stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a per-kind summary table. On by default when --output is not
    /// given.
    #[arg(long = "summary")]
    pub summary: bool,
}

#[derive(Parser)]
pub struct TrackingArgs {
    /// Path to the raw tracking feed (newline-delimited JSON).
    #[arg(value_name = "RAW")]
    pub raw: PathBuf,

    /// Path to the match metadata document.
    #[arg(value_name = "META")]
    pub meta: PathBuf,

    /// Supplementary roster document; replaces the metadata lineups when
    /// non-empty.
    #[arg(long = "additional-meta", value_name = "PATH")]
    pub additional_meta: Option<PathBuf>,

    /// Fraction of frames to keep (0.1 keeps every tenth frame).
    #[arg(long = "sample-rate", value_name = "RATE")]
    pub sample_rate: Option<f64>,

    /// Stop after this many kept frames.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Drop frames recorded while the ball is out of play.
    #[arg(
        long = "only-alive",
        value_name = "BOOL",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub only_alive: bool,

    /// Target coordinate system for every location in the dataset.
    #[arg(long = "coordinates", value_enum, default_value = "provider")]
    pub coordinates: CoordinatesArg,

    /// Write the dataset as JSON to this path ("-" for stdout).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print a frames-per-period summary table. On by default when --output
    /// is not given.
    #[arg(long = "summary")]
    pub summary: bool,
}

/// CLI coordinate system choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum CoordinatesArg {
    Provider,
    Unit,
    Metric,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
