use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Mentor exam-simulation score forecaster.
#[derive(Parser)]
#[command(
    name = "mentor",
    version,
    about = "Forecast the next exam-simulation score and the pass probability"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Forecast the next score with a confidence interval and pass probability.
    Forecast(ForecastArgs),
    /// Print the rolling statistics of a score series.
    Stats(StatsArgs),
}

/// Arguments for the `forecast` subcommand.
#[derive(clap::Args)]
pub struct ForecastArgs {
    /// Path to the score file (one score in [0,1] per line; `#` starts a comment).
    #[arg(short, long)]
    pub scores: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override rolling-window size from config.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Override confidence-interval method from config
    /// (t_distribution, normal_distribution, arima_distribution).
    #[arg(short, long)]
    pub method: Option<String>,

    /// Override pass threshold from config.
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Path to the score file (one score in [0,1] per line; `#` starts a comment).
    #[arg(short, long)]
    pub scores: PathBuf,

    /// Rolling-window size.
    #[arg(short, long, default_value_t = 5)]
    pub window: usize,
}
