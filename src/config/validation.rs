//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value ranges (log level, metrics address)
//! - Detect duplicate component names and contradictory behaviours
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: PlanConfig → Result<(), Vec<ValidationError>>
//! - Runs before a plan is accepted

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::PlanConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A semantic problem in a plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),

    #[error("invalid metrics address {0:?}")]
    InvalidMetricsAddress(String),

    #[error("duplicate component name {0:?}")]
    DuplicateName(String),

    #[error("component {0:?} sets both fail_init and panic_init")]
    ConflictingInitFailure(String),

    #[error("component {0:?} has lifecycle disabled but sets phase or init/shutdown behaviour")]
    LifecycleKnobsWithoutLifecycle(String),
}

pub fn validate_config(config: &PlanConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(config.observability.log_level.clone()));
    }

    if config.observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    let mut names = HashSet::new();
    for component in &config.components {
        if !component.name.is_empty() && !names.insert(component.name.as_str()) {
            errors.push(ValidationError::DuplicateName(component.name.clone()));
        }
        if component.fail_init && component.panic_init {
            errors.push(ValidationError::ConflictingInitFailure(component.name.clone()));
        }
        if !component.lifecycle && component.has_lifecycle_knobs() {
            errors.push(ValidationError::LifecycleKnobsWithoutLifecycle(component.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ComponentConfig;

    fn component(name: &str) -> ComponentConfig {
        ComponentConfig {
            name: name.to_string(),
            ..ComponentConfig::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&PlanConfig::default()).is_ok());
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = PlanConfig::default();
        config.observability.log_level = "loud".into();
        config.observability.metrics_address = "nowhere".into();
        config.components.push(component("db"));
        config.components.push(ComponentConfig {
            fail_init: true,
            panic_init: true,
            ..component("db")
        });
        config.components.push(ComponentConfig {
            lifecycle: false,
            phase: 3,
            ..component("hook")
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::UnknownLogLevel("loud".into()),
                ValidationError::InvalidMetricsAddress("nowhere".into()),
                ValidationError::DuplicateName("db".into()),
                ValidationError::ConflictingInitFailure("db".into()),
                ValidationError::LifecycleKnobsWithoutLifecycle("hook".into()),
            ]
        );
    }

    #[test]
    fn test_unnamed_components_may_repeat() {
        let mut config = PlanConfig::default();
        config.observability.log_level = "DEBUG".into();
        config.components.push(component(""));
        config.components.push(component(""));
        assert!(validate_config(&config).is_ok());
    }
}
