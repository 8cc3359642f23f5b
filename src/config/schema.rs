//! Configuration schema definitions.
//!
//! A plan file describes scripted components for the runner and the CLI.
//! All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration: a component plan.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PlanConfig {
    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Runner settings.
    pub runtime: RuntimeConfig,

    /// Scripted components, in registration order.
    pub components: Vec<ComponentConfig>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9091".to_string(),
        }
    }
}

/// Runner configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Seconds to stay constructed before shutting down.
    /// 0 waits for SIGINT/SIGTERM instead.
    pub hold_secs: u64,
}

/// One scripted component.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ComponentConfig {
    /// Registration name (may be empty).
    pub name: String,

    /// Lifecycle phase; lower initializes first.
    pub phase: i32,

    /// Expose the phased lifecycle capability.
    pub lifecycle: bool,

    /// Expose the post-construct capability.
    pub post_construct: bool,

    /// Report a failure from init.
    pub fail_init: bool,

    /// Panic inside init.
    pub panic_init: bool,

    /// Report a failure from shutdown.
    pub fail_shutdown: bool,

    /// Time spent inside init, in milliseconds.
    pub init_delay_ms: u64,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            phase: 0,
            lifecycle: true,
            post_construct: false,
            fail_init: false,
            panic_init: false,
            fail_shutdown: false,
            init_delay_ms: 0,
        }
    }
}

impl ComponentConfig {
    /// Any init/shutdown behaviour configured.
    pub fn has_lifecycle_knobs(&self) -> bool {
        self.phase != 0 || self.fail_init || self.panic_init || self.fail_shutdown || self.init_delay_ms > 0
    }
}
