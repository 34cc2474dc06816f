use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use sim::{SimConfig, init_tracing, load_config, run_realtime, run_stepped};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Headless ghost AI simulation", long_about = None)]
struct Args {
    // JSON config file, built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    // Maximum number of ticks to run
    #[arg(short, long, default_value_t = 3_600)]
    ticks: u64,

    // Seed for every RNG in the run, random when omitted
    #[arg(long)]
    seed: Option<u64>,

    // Pace ticks against the wall clock instead of stepping as fast as possible
    #[arg(long, default_value_t = false)]
    realtime: bool,

    // Log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    log: String,
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log)?;

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => SimConfig::default(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("running {} ticks with seed {}", args.ticks, seed);

    let summary = if args.realtime {
        run_realtime(&config, args.ticks, seed).await?
    } else {
        run_stepped(&config, args.ticks, seed)?
    };

    print!("{summary}");
    Ok(())
}
