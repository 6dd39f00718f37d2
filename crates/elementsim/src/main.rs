//! ElementSim - headless falling-sand simulation

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use elementsim::{App, ScenarioDefinition, SimConfig};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of ticks to simulate
    #[arg(long, default_value = "600")]
    ticks: u64,

    /// RNG seed (overrides the configured one)
    #[arg(long)]
    seed: Option<u64>,

    /// RON scenario file with paint commands (default: built-in demo scene)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Write a PNG snapshot of the final grid to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Pace ticks to simulation.ticks_per_second instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Configuration file (default: elementsim.ron if present)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    log::info!("Starting ElementSim");

    let mut config = SimConfig::load_from(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    log::debug!("Configuration: {config:?}");

    let scenario = args
        .scenario
        .as_deref()
        .map(ScenarioDefinition::from_file)
        .transpose()?;

    let mut app = App::new(config, scenario)?;
    app.run(args.ticks, args.realtime);

    if let Some(output) = &args.output {
        app.save_snapshot(output)?;
    }

    app.shutdown();
    Ok(())
}
