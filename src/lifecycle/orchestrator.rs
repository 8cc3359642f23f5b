//! Lifecycle orchestration.
//!
//! # Responsibilities
//! - Run the wiring step once and scan every distinct instance it returns
//! - Notify post-construct components before any init begins
//! - Initialize lifecycle components in ascending phase order
//! - Roll back everything already initialized when an init fails or panics
//! - Shut down live components in reverse init order
//!
//! # State Transitions
//! ```text
//! Unconstructed → Constructing: construct()
//! Constructing → Constructed: every init succeeded
//! Constructing → ShutDown: wiring failure, scan panic (phase or post-construct), or init failure (after rollback)
//! Constructed → ShuttingDown → ShutDown: shutdown()
//! ```
//!
//! # Design Decisions
//! - The registry holds exactly the components initialized so far, in init order
//! - Panics from components are caught and treated like reported failures
//! - Shutdown drains are total: a failing component never stops the drain

use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};

use uuid::Uuid;

use crate::component::{ComponentRecord, PhasedComponent};
use crate::component::record::InstanceId;
use crate::lifecycle::error::{panic_message, LifecycleError, ShutdownFailure, ShutdownReport};
use crate::lifecycle::registry::PhaseRegistry;
use crate::observability::metrics;
use crate::wiring::{WiredObject, Wiring};

/// Where an orchestrator is in its single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorState {
    Unconstructed,
    Constructing,
    Constructed,
    ShuttingDown,
    ShutDown,
}

/// Drives post-construct, phased init and reverse-order shutdown.
pub struct Orchestrator<W: Wiring> {
    wiring: W,
    registry: PhaseRegistry,
    state: OrchestratorState,
    run_id: Option<Uuid>,
}

impl<W: Wiring> Orchestrator<W> {
    pub fn new(wiring: W) -> Self {
        Self {
            wiring,
            registry: PhaseRegistry::new(),
            state: OrchestratorState::Unconstructed,
            run_id: None,
        }
    }

    pub fn state(&self) -> OrchestratorState {
        self.state
    }

    /// ID of the construct cycle, once `construct()` has been called.
    pub fn run_id(&self) -> Option<Uuid> {
        self.run_id
    }

    /// Names of the components currently live, in init order.
    pub fn live_components(&self) -> Vec<&str> {
        self.registry.iter().map(|c| c.name()).collect()
    }

    pub fn live_count(&self) -> usize {
        self.registry.len()
    }

    /// Wire, notify and initialize every component.
    ///
    /// On failure nothing is left live: components already initialized
    /// have been shut down in reverse order before the error is returned.
    ///
    /// # Panics
    /// If called more than once on the same orchestrator.
    pub fn construct(&mut self) -> Result<(), LifecycleError> {
        if self.state != OrchestratorState::Unconstructed {
            panic!("Orchestrator::construct() can be called only once (state: {:?})", self.state);
        }

        let run_id = Uuid::new_v4();
        self.run_id = Some(run_id);
        let span = tracing::info_span!("construct", %run_id);
        let _guard = span.enter();

        tracing::info!("Initializing...");
        self.state = OrchestratorState::Constructing;
        self.registry = PhaseRegistry::new();

        let objects = match self.wiring.populate() {
            Ok(objects) => objects,
            Err(e) => {
                tracing::error!(error = %e, "Wiring failed");
                self.state = OrchestratorState::ShutDown;
                return Err(e.into());
            }
        };

        if let Err(e) = self.after_population(objects) {
            // Nothing was initialized; drop what was registered so far.
            self.registry.snapshot_and_clear();
            self.state = OrchestratorState::ShutDown;
            return Err(e);
        }

        match self.init_all() {
            Ok(()) => {
                self.state = OrchestratorState::Constructed;
                tracing::info!(count = self.registry.len(), "All components initialized");
                Ok(())
            }
            Err(e) => {
                self.state = OrchestratorState::ShutDown;
                Err(e)
            }
        }
    }

    /// Shut down every live component, last initialized first.
    ///
    /// Never fails: per-component failures are logged and collected in
    /// the returned report. Calling it again is a no-op.
    pub fn shutdown(&mut self) -> ShutdownReport {
        if self.state != OrchestratorState::Constructed {
            tracing::info!(state = ?self.state, "Shutdown: nothing was initialized or already shut down");
            return ShutdownReport::default();
        }

        tracing::info!("Shutdown.");
        self.state = OrchestratorState::ShuttingDown;
        let report = self.drain_in_reverse();
        self.state = OrchestratorState::ShutDown;
        report
    }

    /// Scan the wired objects: notify post-constructors, register lifecycle components.
    fn after_population(&mut self, objects: Vec<WiredObject>) -> Result<(), LifecycleError> {
        tracing::debug!(count = objects.len(), "Scanning all objects after population");
        let mut seen: HashSet<InstanceId> = HashSet::with_capacity(objects.len());

        for object in objects {
            let Some(instance) = object.instance else {
                tracing::warn!(name = %object.name, "Skipping nil instance");
                continue;
            };
            let record = ComponentRecord::new(instance, object.name);
            if !seen.insert(record.id()) {
                tracing::debug!(component = %record, "Skipping instance already scanned");
                continue;
            }

            if let Some(pc) = record.post_constructor() {
                tracing::debug!(component = %record, "Post construct");
                if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| pc.on_ready())) {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(component = %record, %message, "Post construct panicked");
                    return Err(LifecycleError::ScanPanicked {
                        component: record.name().to_string(),
                        operation: "post-construct",
                        message,
                    });
                }
                metrics::record_post_construct();
            }

            let name = record.name().to_string();
            match panic::catch_unwind(AssertUnwindSafe(|| record.into_phased())) {
                Ok(Some(phased)) => {
                    tracing::debug!(component = %phased, "Found lifecycle component");
                    self.registry.insert(phased);
                }
                Ok(None) => {}
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    tracing::error!(component = %name, %message, "Phase query panicked");
                    return Err(LifecycleError::ScanPanicked {
                        component: name,
                        operation: "phase",
                        message,
                    });
                }
            }
        }
        Ok(())
    }

    /// Drain the pending registry in phase order, re-registering each success.
    fn init_all(&mut self) -> Result<(), LifecycleError> {
        let pending = self.registry.snapshot_and_clear();
        tracing::info!(count = pending.len(), "Initializing lifecycle components");
        self.registry = PhaseRegistry::with_capacity(pending.len());

        for component in pending {
            tracing::info!(component = %component, "Initializing");
            match panic::catch_unwind(AssertUnwindSafe(|| component.init())) {
                Ok(Ok(())) => {
                    metrics::record_init("ok");
                    self.registry.insert(component);
                    metrics::set_live_components(self.registry.len());
                }
                Ok(Err(source)) => {
                    metrics::record_init("error");
                    tracing::error!(component = %component, error = %source, "Initialization failed");
                    let rollback = self.rollback();
                    return Err(LifecycleError::InitFailed {
                        component: component.name().to_string(),
                        phase: component.phase(),
                        source,
                        rollback,
                    });
                }
                Err(payload) => {
                    metrics::record_init("panic");
                    let message = panic_message(payload.as_ref());
                    tracing::error!(component = %component, %message, "Initialization panicked");
                    let rollback = self.rollback();
                    return Err(LifecycleError::InitPanicked {
                        component: component.name().to_string(),
                        phase: component.phase(),
                        message,
                        rollback,
                    });
                }
            }
        }
        Ok(())
    }

    fn rollback(&mut self) -> ShutdownReport {
        tracing::error!(
            count = self.registry.len(),
            "Rolling back lifecycle components due to failure in initialization cycle"
        );
        metrics::record_rollback();
        self.drain_in_reverse()
    }

    fn drain_in_reverse(&mut self) -> ShutdownReport {
        let live = self.registry.snapshot_and_clear();
        tracing::info!(count = live.len(), "Shutting down lifecycle components");

        let mut report = ShutdownReport::default();
        for (remaining, component) in live.iter().enumerate().rev() {
            tracing::info!(component = %component, "Shutting down");
            report.stopped.push(component.name().to_string());
            let failure = shutdown_one(component);
            metrics::set_live_components(remaining);
            if let Some(failure) = failure {
                tracing::error!(error = %failure, "Shutdown failed, continuing");
                report.failures.push(failure);
            }
        }
        report
    }
}

fn shutdown_one(component: &PhasedComponent) -> Option<ShutdownFailure> {
    match panic::catch_unwind(AssertUnwindSafe(|| component.shutdown())) {
        Ok(Ok(())) => {
            metrics::record_shutdown("ok");
            None
        }
        Ok(Err(source)) => {
            metrics::record_shutdown("error");
            Some(ShutdownFailure::Failed {
                component: component.name().to_string(),
                source,
            })
        }
        Err(payload) => {
            metrics::record_shutdown("panic");
            Some(ShutdownFailure::Panicked {
                component: component.name().to_string(),
                message: panic_message(payload.as_ref()),
            })
        }
    }
}
