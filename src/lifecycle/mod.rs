//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Construct (orchestrator.rs):
//!     Wiring → scan distinct instances → post-construct notifications
//!     → registry.rs (sorted by phase) → init in phase order
//!     → on failure: rollback in reverse order
//!
//! Shutdown (orchestrator.rs):
//!     snapshot-and-clear registry → shutdown in reverse order → report
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → runner triggers shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: lower phase first, strictly sequential
//! - Ordered shutdown: exact reverse of successful inits
//! - Fail fast: any init failure is terminal for the construct cycle

pub mod error;
pub mod orchestrator;
pub mod registry;
pub mod signals;

pub use error::{LifecycleError, ShutdownFailure, ShutdownReport};
pub use orchestrator::{Orchestrator, OrchestratorState};
pub use registry::PhaseRegistry;
