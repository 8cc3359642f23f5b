//! Component capabilities.
//!
//! # Data Flow
//! ```text
//! wiring engine → Arc<dyn Component>
//!     → capability.rs (lifecycle? post-construct?)
//!     → record.rs (ComponentRecord, cached phase + flags)
//!     → lifecycle::PhaseRegistry (lifecycle-capable records only)
//! ```
//!
//! # Design Decisions
//! - Capabilities are opt-in views (`as_lifecycle`, `as_post_construct`), not type names
//! - Every method takes `&self`; components use interior mutability for state
//! - A component's phase is read once, when its record is created

use thiserror::Error;

pub mod capability;
pub mod record;

pub use capability::Capabilities;
pub use record::{ComponentRecord, PhasedComponent};

/// Boxed error accepted from component implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error reported by a component's `init()` or `shutdown()`.
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Plain failure message.
    #[error("{0}")]
    Message(String),

    /// Any other error raised by the component.
    #[error(transparent)]
    Other(#[from] BoxError),
}

impl ComponentError {
    /// Create an error from a message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

/// Any instance the wiring engine can hand to the orchestrator.
///
/// Both accessors default to `None`; a component opts into a capability by
/// returning `Some(self)`.
pub trait Component: Send + Sync + 'static {
    /// Phased lifecycle view of this component, if supported.
    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        None
    }

    /// Post-construct view of this component, if supported.
    fn as_post_construct(&self) -> Option<&dyn PostConstruct> {
        None
    }
}

/// Phased lifecycle capability.
///
/// Lower phases initialize first and shut down last.
pub trait Lifecycle {
    /// Ordering key.
    fn phase(&self) -> i32;

    /// Bring the component up.
    fn init(&self) -> Result<(), ComponentError>;

    /// Tear the component down. Failures are tolerated and reported.
    fn shutdown(&self) -> Result<(), ComponentError>;
}

/// Post-construct capability: one notification after wiring, before any `init()`.
pub trait PostConstruct {
    fn on_ready(&self);
}
