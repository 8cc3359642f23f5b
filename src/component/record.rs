//! Component records.
//!
//! A `ComponentRecord` pairs a wired instance with the name it was
//! registered under and its detected capabilities. Lifecycle-capable
//! records are promoted to `PhasedComponent`, which caches the phase used
//! as the registry sort key.

use std::fmt;
use std::sync::Arc;

use crate::component::{Capabilities, Component, ComponentError, Lifecycle, PostConstruct};

/// Identity of a component instance (address of the shared allocation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(usize);

impl InstanceId {
    pub fn of(instance: &Arc<dyn Component>) -> Self {
        Self(Arc::as_ptr(instance).cast::<()>() as usize)
    }
}

/// One wired instance under lifecycle management.
#[derive(Clone)]
pub struct ComponentRecord {
    instance: Arc<dyn Component>,
    name: String,
    capabilities: Capabilities,
}

impl ComponentRecord {
    /// Create a record, detecting capabilities once.
    pub fn new(instance: Arc<dyn Component>, name: impl Into<String>) -> Self {
        let capabilities = Capabilities::detect(Some(instance.as_ref()));
        Self {
            instance,
            name: name.into(),
            capabilities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> InstanceId {
        InstanceId::of(&self.instance)
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    pub fn instance(&self) -> &Arc<dyn Component> {
        &self.instance
    }

    /// Post-construct view, if the component has one.
    pub fn post_constructor(&self) -> Option<&dyn PostConstruct> {
        if !self.capabilities.post_construct {
            return None;
        }
        self.instance.as_post_construct()
    }

    /// Promote to a phased component, reading its phase once. Returns
    /// `None` for components without the lifecycle capability.
    pub fn into_phased(self) -> Option<PhasedComponent> {
        if !self.capabilities.lifecycle {
            return None;
        }
        let phase = self.instance.as_lifecycle()?.phase();
        Some(PhasedComponent { record: self, phase })
    }
}

impl fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lifecycle = if self.capabilities.lifecycle { "yes" } else { "no" };
        write!(f, "component \"{}\" (lifecycle: {})", self.name, lifecycle)
    }
}

impl fmt::Debug for ComponentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRecord")
            .field("name", &self.name)
            .field("id", &self.id())
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

/// A lifecycle-capable record with its cached phase.
#[derive(Debug, Clone)]
pub struct PhasedComponent {
    record: ComponentRecord,
    phase: i32,
}

impl PhasedComponent {
    pub fn phase(&self) -> i32 {
        self.phase
    }

    pub fn name(&self) -> &str {
        self.record.name()
    }

    pub fn record(&self) -> &ComponentRecord {
        &self.record
    }

    pub fn init(&self) -> Result<(), ComponentError> {
        self.lifecycle()?.init()
    }

    pub fn shutdown(&self) -> Result<(), ComponentError> {
        self.lifecycle()?.shutdown()
    }

    fn lifecycle(&self) -> Result<&dyn Lifecycle, ComponentError> {
        self.record.instance.as_lifecycle().ok_or_else(|| {
            ComponentError::msg(format!("{} no longer exposes a lifecycle", self.record.name))
        })
    }
}

impl fmt::Display for PhasedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "component \"{}\" (lifecycle: yes, phase: {})", self.name(), self.phase)
    }
}
