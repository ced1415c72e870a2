use anyhow::Result;
use tracing::info;

use mentor_rolling::RollingStats;

use crate::cli::StatsArgs;
use crate::input;

/// Print the rolling statistics of a score series as a table.
pub fn run(args: &StatsArgs) -> Result<()> {
    let scores = input::read_scores(&args.scores)?;
    info!(n = scores.len(), window = args.window, "computing rolling statistics");

    let stats = RollingStats::compute(&scores, args.window)?;

    println!(
        "{:>5} {:>10} {:>10} {:>10} {:>10} {:>10}",
        "idx", "score", "mean", "std", "momentum", "z-score"
    );
    for i in 0..scores.len() {
        println!(
            "{:>5} {:>10.4} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            i,
            scores[i],
            stats.mean()[i],
            stats.std()[i],
            stats.momentum()[i],
            stats.z_score()[i]
        );
    }
    Ok(())
}
