//! Lifecycle errors and shutdown reports.

use std::any::Any;

use thiserror::Error;

use crate::component::ComponentError;
use crate::wiring::WiringError;

/// Why a construct cycle failed. Every variant is terminal.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// The wiring engine could not populate the graph.
    #[error("wiring failed: {0}")]
    Wiring(#[from] WiringError),

    /// Component code panicked while the wired objects were scanned
    /// (phase query or post-construct notification), before any init.
    #[error("{component} panicked in {operation}: {message}")]
    ScanPanicked {
        component: String,
        operation: &'static str,
        message: String,
    },

    /// A component reported an init failure.
    #[error("failed to initialize {component} (phase {phase}): {source}")]
    InitFailed {
        component: String,
        phase: i32,
        #[source]
        source: ComponentError,
        rollback: ShutdownReport,
    },

    /// A component panicked during init.
    #[error("{component} (phase {phase}) panicked during initialization: {message}")]
    InitPanicked {
        component: String,
        phase: i32,
        message: String,
        rollback: ShutdownReport,
    },
}

impl LifecycleError {
    /// The rollback performed before this error was returned, if any.
    pub fn rollback(&self) -> Option<&ShutdownReport> {
        match self {
            Self::InitFailed { rollback, .. } | Self::InitPanicked { rollback, .. } => Some(rollback),
            _ => None,
        }
    }
}

/// A component that did not shut down cleanly.
#[derive(Debug, Error)]
pub enum ShutdownFailure {
    #[error("{component} failed to shut down: {source}")]
    Failed {
        component: String,
        #[source]
        source: ComponentError,
    },

    #[error("{component} panicked during shutdown: {message}")]
    Panicked { component: String, message: String },
}

impl ShutdownFailure {
    pub fn component(&self) -> &str {
        match self {
            Self::Failed { component, .. } | Self::Panicked { component, .. } => component,
        }
    }
}

/// Outcome of a reverse drain.
#[derive(Debug, Default)]
pub struct ShutdownReport {
    /// Components whose shutdown was invoked, in the order it was invoked.
    pub stopped: Vec<String>,
    /// Components whose shutdown failed or panicked.
    pub failures: Vec<ShutdownFailure>,
}

impl ShutdownReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Nothing was shut down.
    pub fn is_noop(&self) -> bool {
        self.stopped.is_empty()
    }
}

/// Extract a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LifecycleError::InitFailed {
            component: "db".into(),
            phase: 1,
            source: ComponentError::msg("connection refused"),
            rollback: ShutdownReport::default(),
        };
        assert_eq!(
            err.to_string(),
            "failed to initialize db (phase 1): connection refused"
        );
        assert!(err.rollback().unwrap().is_noop());

        let err = LifecycleError::from(WiringError::DuplicateName("db".into()));
        assert_eq!(err.to_string(), "wiring failed: two instances named db");
        assert!(err.rollback().is_none());
    }

    #[test]
    fn test_panic_message() {
        let payload = std::panic::catch_unwind(|| panic!("boom")).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "boom");

        let payload = std::panic::catch_unwind(|| panic!("code {}", 7)).unwrap_err();
        assert_eq!(panic_message(payload.as_ref()), "code 7");

        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic payload");
    }

    #[test]
    fn test_report() {
        let mut report = ShutdownReport::default();
        assert!(report.is_clean());
        assert!(report.is_noop());

        report.stopped.push("cache".into());
        report.failures.push(ShutdownFailure::Panicked {
            component: "cache".into(),
            message: "poisoned".into(),
        });
        assert!(!report.is_clean());
        assert_eq!(report.failures[0].component(), "cache");
    }
}
