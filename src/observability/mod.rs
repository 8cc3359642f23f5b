//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Orchestrator and wiring produce:
//!     → logging.rs (structured log events, run_id span per construct)
//!     → metrics.rs (init/shutdown counters, live component gauge)
//!
//! Consumers:
//!     → stdout via the fmt layer
//!     → Metrics endpoint (Prometheus scrape), runner only
//! ```

pub mod logging;
pub mod metrics;
