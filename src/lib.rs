//! Phased component lifecycle orchestration library

pub mod component;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod plan;
pub mod runner;
pub mod wiring;

pub use component::{Component, ComponentError, Lifecycle, PostConstruct};
pub use config::PlanConfig;
pub use lifecycle::{LifecycleError, Orchestrator, OrchestratorState, ShutdownReport};
pub use runner::Runner;
pub use wiring::{StaticGraph, WiredObject, Wiring, WiringError};
