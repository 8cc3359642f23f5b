//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! plan file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → PlanConfig (validated, immutable)
//!     → plan::build_graph / observability::logging
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal plans
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{ComponentConfig, ObservabilityConfig, PlanConfig, RuntimeConfig};
pub use validation::ValidationError;
