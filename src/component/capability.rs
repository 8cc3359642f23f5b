//! Capability detection.
//!
//! # Responsibilities
//! - Answer "phased lifecycle?" and "post-construct?" for any instance
//! - Treat a missing instance as supporting neither
//!
//! # Design Decisions
//! - Pure: no side effects, same answer every time for the same instance
//! - Never fails; a component without a capability simply reports `None`

use crate::component::Component;

/// Capability flags for one component instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// Exposes `phase()`, `init()` and `shutdown()`.
    pub lifecycle: bool,
    /// Exposes `on_ready()`.
    pub post_construct: bool,
}

impl Capabilities {
    /// Detect the capabilities of an instance.
    pub fn detect(instance: Option<&dyn Component>) -> Self {
        match instance {
            Some(component) => Self {
                lifecycle: component.as_lifecycle().is_some(),
                post_construct: component.as_post_construct().is_some(),
            },
            None => Self::default(),
        }
    }

    /// Whether the component takes part in lifecycle management at all.
    pub fn is_managed(&self) -> bool {
        self.lifecycle || self.post_construct
    }
}
