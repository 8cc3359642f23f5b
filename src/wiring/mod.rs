//! Boundary with the wiring engine.
//!
//! # Data Flow
//! ```text
//! component declarations (named / unnamed)
//!     → Wiring::populate (resolve references, synthesize missing instances)
//!     → Vec<WiredObject> (every resulting instance, possibly with repeats)
//!     → lifecycle::Orchestrator
//! ```
//!
//! # Design Decisions
//! - Reference resolution is the engine's business; the orchestrator only sees the result
//! - `populate` is invoked exactly once per construct cycle
//! - The result may contain the same instance more than once and may contain nil entries

use std::sync::Arc;

use thiserror::Error;

use crate::component::Component;

pub mod graph;

pub use graph::{Declaration, StaticGraph};

/// One instance reported by the wiring engine.
#[derive(Clone)]
pub struct WiredObject {
    /// The instance, or `None` when the engine reports an empty slot.
    pub instance: Option<Arc<dyn Component>>,
    /// Name the instance was registered under (may be empty).
    pub name: String,
}

impl WiredObject {
    pub fn new(instance: Arc<dyn Component>, name: impl Into<String>) -> Self {
        Self {
            instance: Some(instance),
            name: name.into(),
        }
    }

    /// An empty slot.
    pub fn nil(name: impl Into<String>) -> Self {
        Self {
            instance: None,
            name: name.into(),
        }
    }
}

impl std::fmt::Debug for WiredObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WiredObject")
            .field("name", &self.name)
            .field("nil", &self.instance.is_none())
            .finish()
    }
}

/// Errors reported when the graph cannot be populated.
#[derive(Debug, Error)]
pub enum WiringError {
    /// A required reference has no candidate.
    #[error("missing reference {reference} required by {required_by}")]
    MissingReference { reference: String, required_by: String },

    /// A reference matches more than one candidate.
    #[error("ambiguous reference {reference}: {candidates:?}")]
    Ambiguous { reference: String, candidates: Vec<String> },

    /// The references form a cycle the engine cannot satisfy.
    #[error("reference cycle: {}", .0.join(" -> "))]
    Cycle(Vec<String>),

    /// Two declarations share the same name.
    #[error("two instances named {0}")]
    DuplicateName(String),

    /// Any other engine failure.
    #[error("{0}")]
    Other(String),
}

/// The population step: resolve declarations and return every instance.
pub trait Wiring {
    fn populate(&mut self) -> Result<Vec<WiredObject>, WiringError>;
}

impl<F> Wiring for F
where
    F: FnMut() -> Result<Vec<WiredObject>, WiringError>,
{
    fn populate(&mut self) -> Result<Vec<WiredObject>, WiringError> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain;
    impl Component for Plain {}

    #[test]
    fn test_closure_wiring() {
        let mut calls = 0;
        let mut wiring = || {
            calls += 1;
            Ok::<_, WiringError>(vec![WiredObject::new(Arc::new(Plain), "a"), WiredObject::nil("b")])
        };

        let objects = wiring.populate().unwrap();
        assert_eq!(objects.len(), 2);
        assert!(objects[0].instance.is_some());
        assert!(objects[1].instance.is_none());
        drop(wiring);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_error_display() {
        let err = WiringError::Cycle(vec!["a".into(), "b".into(), "a".into()]);
        assert_eq!(err.to_string(), "reference cycle: a -> b -> a");

        let err = WiringError::MissingReference {
            reference: "db".into(),
            required_by: "api".into(),
        };
        assert_eq!(err.to_string(), "missing reference db required by api");
    }
}
