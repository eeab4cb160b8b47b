//! Voronoi Elimination Simulator CLI
//!
//! Run seeded batches of elimination or backward-growth trials and report
//! per-rank survivor statistics.

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use voronoi_core::PointDistribution;
use voronoi_sim::scenarios::ExperimentId;
use voronoi_sim::{ExperimentConfig, ExperimentExport, ExperimentResult, ExperimentRunner};

/// Voronoi elimination experiment CLI
#[derive(Parser, Debug)]
#[command(name = "voronoi-sim")]
#[command(about = "Simulate sequential elimination of 1-D Voronoi intervals", long_about = None)]
struct Args {
    /// Master seed for determinism (0 = random from time)
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Initial population (elimination) or final population (growth)
    #[arg(short, long, default_value = "100")]
    points: usize,

    /// Survivors after elimination, or starting size for growth
    #[arg(short = 'k', long, default_value = "10")]
    survivors: usize,

    /// Number of independent trials
    #[arg(short, long, default_value = "200")]
    trials: usize,

    /// Points compared per round under the sampled policy
    #[arg(long, default_value = "5")]
    sample_size: usize,

    /// Initial point distribution (uniform, normal)
    #[arg(short, long, default_value = "uniform")]
    distribution: String,

    /// Experiment to run (global, sampled, backward, all)
    #[arg(short = 'e', long, default_value = "all")]
    experiment: String,

    /// Rejection budget per backward insertion (0 = unbounded)
    #[arg(long, default_value = "1000000")]
    max_attempts: u64,

    /// Histogram bins in the export
    #[arg(long, default_value = "20")]
    bins: usize,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,

    /// Export statistics to a JSON file for plotting
    #[arg(long)]
    export: Option<String>,

    /// Include raw run results in the export
    #[arg(long)]
    export_runs: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }

    if !args.json {
        info!("Voronoi Elimination Simulator v{}", env!("CARGO_PKG_VERSION"));
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    }

    // Parse experiments
    let experiments: Vec<ExperimentId> = if args.experiment == "all" {
        ExperimentId::all()
    } else {
        match args.experiment.parse() {
            Ok(id) => vec![id],
            Err(e) => {
                error!("{}", e);
                error!("Available experiments: global, sampled, backward, all");
                std::process::exit(1);
            }
        }
    };

    let distribution: PointDistribution = match args.distribution.parse() {
        Ok(d) => d,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if args.export.is_some() && experiments.len() > 1 {
        error!("--export only supports a single experiment, not 'all'");
        std::process::exit(1);
    }

    // Determine base seed
    let seed = if args.seed == 0 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1)
    } else {
        args.seed
    };

    let config = ExperimentConfig {
        seed,
        points: args.points,
        survivors: args.survivors,
        trials: args.trials,
        sample_size: args.sample_size,
        distribution,
        max_attempts: if args.max_attempts == 0 { None } else { Some(args.max_attempts) },
        histogram_bins: args.bins,
        progress_every: if args.json { 0 } else { (args.trials / 4).max(1) },
    };

    let runner = ExperimentRunner::new(config.clone());
    let mut all_results: Vec<ExperimentResult> = Vec::new();

    for experiment in &experiments {
        let result = match runner.run(*experiment) {
            Ok(result) => result,
            Err(e) => {
                error!("✗ {} could not run: {}", experiment.name(), e);
                std::process::exit(1);
            }
        };

        if !args.json {
            report(&result);
        }

        if let Some(path) = &args.export {
            let export = ExperimentExport::from_result(&config, &result, args.export_runs);
            match export.write_to_file(path) {
                Ok(()) => info!("Exported {} to {}", experiment.name(), path),
                Err(e) => {
                    error!("Failed to write export: {}", e);
                    std::process::exit(1);
                }
            }
        }

        all_results.push(result);
    }

    let failed_count = all_results.iter().filter(|r| !r.passed).count();

    if args.json {
        let summary = serde_json::json!({
            "seed": seed,
            "total": all_results.len(),
            "failed": failed_count,
            "results": all_results.iter().map(|r| {
                serde_json::json!({
                    "experiment": r.experiment.name(),
                    "passed": r.passed,
                    "trials_completed": r.trials_completed,
                    "trials_failed": r.trials_failed,
                    "means": r.statistics.as_ref().map(|s| s.means.clone()),
                    "std_devs": r.statistics.as_ref().map(|s| s.std_devs.clone()),
                    "mean_removed_weight": r.mean_removed_weight,
                    "total_attempts": r.total_attempts,
                    "failure_reason": r.failure_reason,
                })
            }).collect::<Vec<_>>(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                error!("Failed to serialize summary: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        if failed_count == 0 {
            info!("✅ All {} experiments completed", all_results.len());
        } else {
            error!("❌ {}/{} experiments failed", failed_count, all_results.len());
        }
    }

    if failed_count > 0 {
        std::process::exit(1);
    }
}

/// Logs a human-readable summary of one experiment.
fn report(result: &ExperimentResult) {
    if !result.passed {
        error!(
            "✗ {} (seed={}) FAILED: {}",
            result.experiment.name(),
            result.seed,
            result.failure_reason.as_deref().unwrap_or("unknown")
        );
        return;
    }

    info!(
        "✓ {} (seed={}) {} trials, {} failed",
        result.experiment.name(),
        result.seed,
        result.trials_completed,
        result.trials_failed
    );
    if let Some(stats) = &result.statistics {
        for (rank, (mean, sd)) in stats.means.iter().zip(&stats.std_devs).enumerate() {
            info!("  rank {:>3}: mean={:.4} sd={:.4}", rank + 1, mean, sd);
        }
    }
    if let Some(w) = result.mean_removed_weight {
        info!("  mean eliminated weight: {:.6}", w);
    }
    if result.experiment.is_rejection_sampled() {
        info!("  rejection attempts: {}", result.total_attempts);
    }
}
