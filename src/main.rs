//! Lifecycle orchestrator runner.
//!
//! Loads a component plan, constructs every component in phase order,
//! stays up until SIGINT/SIGTERM (or the plan's hold timer), then shuts
//! everything down in reverse order.
//!
//! # Architecture Overview
//!
//! ```text
//!   plan.toml ──▶ config ──▶ plan::build_graph ──▶ StaticGraph (wiring)
//!                                                        │
//!                                                        ▼
//!                     ┌──────────────────── Orchestrator ─────────────────────┐
//!                     │  scan instances ─▶ post-construct ─▶ PhaseRegistry     │
//!                     │  init (phase ↑) ──▶ live registry ──▶ shutdown (↓)     │
//!                     │           └── failure ─▶ rollback (reverse) ──┘        │
//!                     └────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use lifecycle_orchestrator::config::{load_config, PlanConfig};
use lifecycle_orchestrator::observability::{logging, metrics};
use lifecycle_orchestrator::Runner;

#[derive(Parser)]
#[command(name = "lifecycle-orchestrator")]
#[command(about = "Construct a component plan, hold it, and shut it down in reverse order", long_about = None)]
struct Args {
    /// Path to the plan file (TOML). An empty plan is used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => PlanConfig::default(),
    };

    logging::init_logging(&config.observability);
    tracing::info!("lifecycle-orchestrator v0.1.0 starting");
    tracing::info!(
        components = config.components.len(),
        hold_secs = config.runtime.hold_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Already checked by config validation.
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    match Runner::new(config).run().await {
        Ok(outcome) => {
            tracing::info!(
                initialized = outcome.initialized.len(),
                failures = outcome.report.failures.len(),
                "Run finished"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "Construction failed, everything was rolled back");
            Err(e.into())
        }
    }
}
