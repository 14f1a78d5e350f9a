#![allow(clippy::doc_markdown)]
//! `graphkit` - runs the graphkit demonstration scenarios.

use std::path::PathBuf;

use clap::Parser;
use graphkit_cli::{run, Scenario, ScenarioOptions};
use graphkit_core::{BackendKind, GraphkitConfig, TraversalKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// graphkit - interchangeable graph storage, traversals and adapters
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario to run
    #[arg(value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Configuration file (./graphkit.toml is used when present)
    #[arg(short, long, env = "GRAPHKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Storage backend for dynamic graphs: matrix or list
    #[arg(long)]
    backend: Option<BackendKind>,

    /// Search order: natural, dfs, bfs or path
    #[arg(long)]
    order: Option<TraversalKind>,

    /// Start vertex for the search scenario
    #[arg(long)]
    start: Option<usize>,

    /// Value offered to the responsibility chain
    #[arg(long, default_value_t = 4, allow_negative_numbers = true)]
    chain_probe: i64,

    /// Value broadcast to the composite
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    broadcast_value: i64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GraphkitConfig::load_from(path)?,
        None => GraphkitConfig::load()?,
    };

    // Logs go to stderr so scenario output stays clean on stdout.
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.logging.level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut options = ScenarioOptions::from_config(&config);
    if let Some(backend) = args.backend {
        options.backend = backend;
    }
    if let Some(order) = args.order {
        options.order = order;
    }
    if let Some(start) = args.start {
        options.start = start;
    }
    options.chain_probe = args.chain_probe;
    options.broadcast_value = args.broadcast_value;

    tracing::info!(
        scenario = %args.scenario,
        backend = %options.backend,
        order = %options.order,
        "Starting graphkit"
    );

    for line in run(args.scenario, &options)? {
        println!("{line}");
    }
    Ok(())
}
