//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::PlanConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a plan from TOML text.
pub fn parse_config(content: &str) -> Result<PlanConfig, ConfigError> {
    let config: PlanConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a plan from a TOML file.
pub fn load_config(path: &Path) -> Result<PlanConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [runtime]
            hold_secs = 2

            [[components]]
            name = "db"
            phase = 1
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.runtime.hold_secs, 2);
        assert_eq!(config.components[0].name, "db");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_and_validation_errors() {
        let err = parse_config("components = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = parse_config(
            r#"
            [[components]]
            name = "db"
            [[components]]
            name = "db"
            "#,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: duplicate component name \"db\""
        );
    }

    #[test]
    fn test_bad_metrics_address_never_reaches_the_runner() {
        let err = parse_config(
            r#"
            [observability]
            metrics_enabled = true
            metrics_address = "localhost"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let config = parse_config("[observability]\nmetrics_enabled = true").unwrap();
        assert!(config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_ok());
    }
}
