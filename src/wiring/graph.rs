//! Declaration set for pre-wired components.
//!
//! `StaticGraph` stands in for a full wiring engine when the caller has
//! already linked its components: it records declarations and hands every
//! declared instance back from `populate`, in registration order.

use std::collections::HashSet;
use std::sync::Arc;

use crate::component::Component;
use crate::wiring::{WiredObject, Wiring, WiringError};

/// A component declaration.
#[derive(Clone)]
pub struct Declaration {
    pub instance: Arc<dyn Component>,
    pub name: String,
}

impl Declaration {
    pub fn new(instance: Arc<dyn Component>, name: impl Into<String>) -> Self {
        Self {
            instance,
            name: name.into(),
        }
    }

    pub fn unnamed(instance: Arc<dyn Component>) -> Self {
        Self::new(instance, "")
    }
}

/// Declarations that are returned as-is by `populate`.
#[derive(Default)]
pub struct StaticGraph {
    declarations: Vec<Declaration>,
}

impl StaticGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register several declarations.
    pub fn register(&mut self, declarations: impl IntoIterator<Item = Declaration>) {
        for declaration in declarations {
            tracing::debug!(name = %declaration.name, "Registering component");
            self.declarations.push(declaration);
        }
    }

    /// Register a single named instance.
    pub fn register_one(&mut self, instance: Arc<dyn Component>, name: impl Into<String>) {
        self.register([Declaration::new(instance, name)]);
    }

    /// Register unnamed instances.
    pub fn register_many(&mut self, instances: impl IntoIterator<Item = Arc<dyn Component>>) {
        self.register(instances.into_iter().map(Declaration::unnamed));
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl Wiring for StaticGraph {
    fn populate(&mut self) -> Result<Vec<WiredObject>, WiringError> {
        let mut names = HashSet::new();
        for declaration in &self.declarations {
            if !declaration.name.is_empty() && !names.insert(declaration.name.as_str()) {
                return Err(WiringError::DuplicateName(declaration.name.clone()));
            }
        }

        Ok(self
            .declarations
            .iter()
            .map(|d| WiredObject::new(d.instance.clone(), d.name.clone()))
            .collect())
    }
}
