//! Scripted components.
//!
//! A `ScriptedComponent` behaves as its `ComponentConfig` says: which
//! capabilities it exposes, whether init fails or panics, whether shutdown
//! fails. Every call it receives is appended to a shared `EventLog`.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::Serialize;

use crate::component::{Component, ComponentError, Lifecycle, PostConstruct};
use crate::config::ComponentConfig;

/// Call received by a scripted component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Ready,
    Init,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifecycleEvent {
    pub component: String,
    pub kind: EventKind,
}

/// Shared, append-only record of lifecycle calls.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<LifecycleEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, component: &str, kind: EventKind) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(LifecycleEvent {
                component: component.to_string(),
                kind,
            });
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Names of the components that received `kind`, in call order.
    pub fn components(&self, kind: EventKind) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.component)
            .collect()
    }
}

/// A component driven by its plan entry.
pub struct ScriptedComponent {
    spec: ComponentConfig,
    events: EventLog,
}

impl ScriptedComponent {
    pub fn new(spec: ComponentConfig, events: EventLog) -> Self {
        Self { spec, events }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }
}

impl Component for ScriptedComponent {
    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        self.spec.lifecycle.then_some(self as &dyn Lifecycle)
    }

    fn as_post_construct(&self) -> Option<&dyn PostConstruct> {
        self.spec.post_construct.then_some(self as &dyn PostConstruct)
    }
}

impl Lifecycle for ScriptedComponent {
    fn phase(&self) -> i32 {
        self.spec.phase
    }

    fn init(&self) -> Result<(), ComponentError> {
        if self.spec.init_delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(self.spec.init_delay_ms));
        }
        if self.spec.panic_init {
            panic!("{} panicked on purpose", self.spec.name);
        }
        if self.spec.fail_init {
            return Err(ComponentError::msg(format!("{} refused to start", self.spec.name)));
        }
        self.events.push(&self.spec.name, EventKind::Init);
        Ok(())
    }

    fn shutdown(&self) -> Result<(), ComponentError> {
        self.events.push(&self.spec.name, EventKind::Shutdown);
        if self.spec.fail_shutdown {
            return Err(ComponentError::msg(format!("{} did not stop cleanly", self.spec.name)));
        }
        Ok(())
    }
}

impl PostConstruct for ScriptedComponent {
    fn on_ready(&self) {
        self.events.push(&self.spec.name, EventKind::Ready);
    }
}
