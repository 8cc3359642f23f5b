//! Component plans.
//!
//! Turns a validated `PlanConfig` into scripted components registered on a
//! `StaticGraph`, and previews the order a construct/shutdown cycle would
//! follow without running anything.

use std::sync::Arc;

use serde::Serialize;

use crate::component::ComponentRecord;
use crate::config::PlanConfig;
use crate::lifecycle::PhaseRegistry;
use crate::wiring::StaticGraph;

pub mod scripted;

pub use scripted::{EventKind, EventLog, LifecycleEvent, ScriptedComponent};

/// Register one scripted component per plan entry.
pub fn build_graph(config: &PlanConfig, events: &EventLog) -> StaticGraph {
    let mut graph = StaticGraph::new();
    for spec in &config.components {
        let name = spec.name.clone();
        graph.register_one(Arc::new(ScriptedComponent::new(spec.clone(), events.clone())), name);
    }
    graph
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderEntry {
    pub name: String,
    pub phase: i32,
}

/// Expected ordering for a plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderPreview {
    /// Components notified after wiring, in registration order.
    pub post_construct: Vec<String>,
    /// Init order.
    pub init: Vec<OrderEntry>,
    /// Shutdown order after a successful construct.
    pub shutdown: Vec<OrderEntry>,
    /// Components with neither capability.
    pub unmanaged: Vec<String>,
}

/// Compute the order a plan would run in.
pub fn preview(config: &PlanConfig) -> OrderPreview {
    let events = EventLog::new();
    let mut registry = PhaseRegistry::with_capacity(config.components.len());
    let mut preview = OrderPreview::default();

    for spec in &config.components {
        let record = ComponentRecord::new(
            Arc::new(ScriptedComponent::new(spec.clone(), events.clone())),
            spec.name.clone(),
        );
        let capabilities = record.capabilities();
        if !capabilities.is_managed() {
            preview.unmanaged.push(spec.name.clone());
            continue;
        }
        if capabilities.post_construct {
            preview.post_construct.push(spec.name.clone());
        }
        if let Some(phased) = record.into_phased() {
            registry.insert(phased);
        }
    }

    preview.init = registry
        .iter()
        .map(|c| OrderEntry {
            name: c.name().to_string(),
            phase: c.phase(),
        })
        .collect();
    preview.shutdown = preview.init.iter().rev().cloned().collect();
    preview
}
