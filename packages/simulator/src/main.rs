//! Euchre simulator CLI - plays AI tables in memory for evaluation.
//!
//! Games are independent and run in parallel; every game's seed is derived
//! from one base seed, so a run replays exactly given `--seed`.

mod metrics;
mod output;
mod simulator;
mod types;

use std::time::Instant;

use clap::Parser;
use euchre_engine::RulesConfig;
use metrics::{build_game_metrics, SimulationSummary};
use output::OutputWriter;
use simulator::{configure_threads, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "euchre-sim")]
#[command(about = "Fast in-memory Euchre simulator for AI evaluation")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u64,

    /// AI type for all seats (shortcut to set all 4 seats to the same AI)
    #[arg(long, conflicts_with_all = ["seat0", "seat1", "seat2", "seat3"])]
    seats: Option<AiType>,

    /// AI type for seat 0
    #[arg(long, default_value = "heuristic")]
    seat0: AiType,

    /// AI type for seat 1
    #[arg(long, default_value = "heuristic")]
    seat1: AiType,

    /// AI type for seat 2
    #[arg(long, default_value = "heuristic")]
    seat2: AiType,

    /// AI type for seat 3
    #[arg(long, default_value = "heuristic")]
    seat3: AiType,

    /// Base seed; each game derives its own from it. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Steps allowed per game before it is reported as stalled
    #[arg(long, default_value_t = Simulator::DEFAULT_MAX_STEPS)]
    max_steps: u64,

    /// The dealer may not pass in the second bidding round
    #[arg(long)]
    stick_the_dealer: bool,

    /// Worker threads (0 = one per core)
    #[arg(long, default_value = "0")]
    threads: usize,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress output files
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "detailed")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only warnings and errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let seat_types = match args.seats {
        Some(ai) => [ai; 4],
        None => [args.seat0, args.seat1, args.seat2, args.seat3],
    };
    let base_seed = args.seed.unwrap_or_else(rand::random);
    let rules = RulesConfig {
        stick_the_dealer: args.stick_the_dealer,
    };

    if args.show_output {
        info!(games = args.games, base_seed, ?seat_types, ?rules, "starting simulator");
    }

    configure_threads(args.threads);
    let simulator = Simulator::new(base_seed, seat_types.map(AiType::name))
        .with_rules(rules)
        .with_max_steps(args.max_steps);
    let mut output_writer = OutputWriter::new(&args.output_dir, args.output_format, args.compress)?;

    let start = Instant::now();
    let results = simulator.run(args.games);
    let elapsed = start.elapsed();

    let ai_types = simulator.seats().map(str::to_string);
    let errors = results.iter().filter(|r| r.is_err()).count() as u64;
    let mut summary = SimulationSummary::new(args.games, errors, elapsed);

    for result in &results {
        match result {
            Ok(game) => {
                summary.record(game);
                let metrics = build_game_metrics(
                    game,
                    ai_types.clone(),
                    args.games,
                    rules.stick_the_dealer,
                    args.metrics_level,
                );
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!(game_no = game.game_no, "failed to write metrics: {e}");
                }
                if args.verbose {
                    info!(
                        game_no = game.game_no,
                        scores = ?game.final_scores,
                        stalled = game.stalled,
                        "game completed"
                    );
                }
            }
            Err(e) => warn!("{e}"),
        }
    }

    let (detail_path, csv_path) = output_writer.output_paths();
    let (detail_path, csv_path) = (detail_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    if args.show_output {
        info!("Detailed results written to: {}", detail_path.display());
        info!("Summary CSV written to: {}", csv_path.display());
        print!("{summary}");
    }

    Ok(())
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
