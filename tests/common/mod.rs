//! Shared recording components for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lifecycle_orchestrator::{Component, ComponentError, Lifecycle, PostConstruct};

/// A call observed by the recorder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Ready(&'static str),
    Init(&'static str),
    Shutdown(&'static str),
}

/// Shared call log.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn inits(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Init(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn shutdowns(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Shutdown(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn readies(&self) -> Vec<&'static str> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Ready(name) => Some(name),
                _ => None,
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    Fail,
    Panic,
}

/// Configurable test component.
pub struct FakeComponent {
    pub name: &'static str,
    phase: Option<i32>,
    post_construct: bool,
    init: Behavior,
    shutdown: Behavior,
    recorder: Recorder,
}

impl FakeComponent {
    /// Lifecycle-capable fake.
    pub fn phased(name: &'static str, phase: i32, recorder: &Recorder) -> Self {
        Self {
            name,
            phase: Some(phase),
            post_construct: false,
            init: Behavior::Succeed,
            shutdown: Behavior::Succeed,
            recorder: recorder.clone(),
        }
    }

    /// Fake with no lifecycle capability.
    pub fn plain(name: &'static str, recorder: &Recorder) -> Self {
        Self {
            phase: None,
            ..Self::phased(name, 0, recorder)
        }
    }

    pub fn notified(mut self) -> Self {
        self.post_construct = true;
        self
    }

    pub fn init_behavior(mut self, behavior: Behavior) -> Self {
        self.init = behavior;
        self
    }

    pub fn shutdown_behavior(mut self, behavior: Behavior) -> Self {
        self.shutdown = behavior;
        self
    }

    pub fn shared(self) -> Arc<dyn Component> {
        Arc::new(self)
    }
}

impl Component for FakeComponent {
    fn as_lifecycle(&self) -> Option<&dyn Lifecycle> {
        self.phase.map(|_| self as &dyn Lifecycle)
    }

    fn as_post_construct(&self) -> Option<&dyn PostConstruct> {
        self.post_construct.then_some(self as &dyn PostConstruct)
    }
}

impl Lifecycle for FakeComponent {
    fn phase(&self) -> i32 {
        self.phase.unwrap_or_default()
    }

    fn init(&self) -> Result<(), ComponentError> {
        match self.init {
            Behavior::Succeed => {
                self.recorder.push(Call::Init(self.name));
                Ok(())
            }
            Behavior::Fail => Err(ComponentError::msg(format!("{} init error", self.name))),
            Behavior::Panic => panic!("{} init panic", self.name),
        }
    }

    fn shutdown(&self) -> Result<(), ComponentError> {
        self.recorder.push(Call::Shutdown(self.name));
        match self.shutdown {
            Behavior::Succeed => Ok(()),
            Behavior::Fail => Err(ComponentError::msg(format!("{} shutdown error", self.name))),
            Behavior::Panic => panic!("{} shutdown panic", self.name),
        }
    }
}

impl PostConstruct for FakeComponent {
    fn on_ready(&self) {
        self.recorder.push(Call::Ready(self.name));
    }
}
