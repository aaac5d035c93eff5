use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "cytoplot",
    about = "Plotting defaults for flow-cytometry channels"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show scaling, bandwidth and binning defaults for a channel name
    Defaults(DefaultsArgs),
    /// Resolve the shared axis range of a channel across CSV exports
    Limits(LimitsArgs),
    /// Print the title of each CSV export
    Titles(TitlesArgs),
}

/// `cytoplot defaults …`
#[derive(Parser, Debug)]
pub struct DefaultsArgs {
    /// Channel name, e.g. `FSC-A` or `Event_length`
    #[arg(value_name = "CHANNEL")]
    pub channel: String,

    /// Number of events the density estimate runs over
    #[arg(long, default_value_t = 1000)]
    pub npoints: usize,
    /// Axis lower bound
    #[arg(long, default_value_t = 0.0)]
    pub xmin: f64,
    /// Axis upper bound
    #[arg(long, default_value_t = 1000.0)]
    pub xmax: f64,
    /// Requested bin count (length channels ignore this)
    #[arg(long)]
    pub bins: Option<f64>,
}

/// `cytoplot limits …`
#[derive(Parser, Debug)]
pub struct LimitsArgs {
    /// CSV exports with a header row (use `-` for stdin)
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Channel to extract
    #[arg(short, long)]
    pub channel: String,

    /// Explicit range overriding the data extrema
    #[arg(long, num_args = 2, value_names = ["LO", "HI"], allow_negative_numbers = true)]
    pub xrange: Option<Vec<f64>>,

    /// Requested bin count
    #[arg(long)]
    pub bins: Option<f64>,
}

/// `cytoplot titles …`
#[derive(Parser, Debug)]
pub struct TitlesArgs {
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}
