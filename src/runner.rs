//! Plan runner.
//!
//! # Responsibilities
//! - Build scripted components from a plan and construct them
//! - Stay constructed until the stop future resolves
//! - Shut down and report
//!
//! # Design Decisions
//! - Construct and shutdown run on the blocking pool: component init and
//!   shutdown are synchronous and may sleep or do blocking I/O
//! - A failed construct returns immediately; rollback already happened

use std::future::Future;
use std::time::Duration;

use crate::config::PlanConfig;
use crate::lifecycle::signals::wait_for_shutdown_signal;
use crate::lifecycle::{LifecycleError, Orchestrator, ShutdownReport};
use crate::plan::{build_graph, EventLog};
use crate::wiring::StaticGraph;

/// Result of a completed run.
#[derive(Debug)]
pub struct RunOutcome {
    /// Components live after construct, in init order.
    pub initialized: Vec<String>,
    pub report: ShutdownReport,
    pub events: EventLog,
}

pub struct Runner {
    config: PlanConfig,
    events: EventLog,
}

impl Runner {
    pub fn new(config: PlanConfig) -> Self {
        Self {
            config,
            events: EventLog::new(),
        }
    }

    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// Run with the stop condition from the plan: a hold timer, or a signal.
    pub async fn run(self) -> Result<RunOutcome, LifecycleError> {
        let hold_secs = self.config.runtime.hold_secs;
        self.run_until(async move {
            if hold_secs > 0 {
                tracing::info!(hold_secs, "Holding before shutdown");
                tokio::time::sleep(Duration::from_secs(hold_secs)).await;
                return;
            }
            match wait_for_shutdown_signal().await {
                Ok(signal) => tracing::info!(%signal, "Shutdown signal received"),
                Err(e) => tracing::error!(error = %e, "Failed to listen for signals, shutting down"),
            }
        })
        .await
    }

    /// Construct, wait for `stop`, then shut down.
    pub async fn run_until<F>(self, stop: F) -> Result<RunOutcome, LifecycleError>
    where
        F: Future<Output = ()>,
    {
        let graph = build_graph(&self.config, &self.events);
        let orchestrator = Orchestrator::new(graph);

        let (orchestrator, constructed) = off_runtime(orchestrator, |o| o.construct()).await;
        constructed?;
        let initialized: Vec<String> = orchestrator
            .live_components()
            .into_iter()
            .map(String::from)
            .collect();
        tracing::info!(count = initialized.len(), "Components constructed");

        stop.await;

        let (_, report) = off_runtime(orchestrator, |o| o.shutdown()).await;
        if report.is_clean() {
            tracing::info!(count = report.stopped.len(), "Shutdown complete");
        } else {
            for failure in &report.failures {
                tracing::warn!(error = %failure, "Component did not shut down cleanly");
            }
        }

        Ok(RunOutcome {
            initialized,
            report,
            events: self.events,
        })
    }
}

/// Run a synchronous orchestrator step on the blocking pool, handing the
/// orchestrator back with the result.
async fn off_runtime<R, F>(
    mut orchestrator: Orchestrator<StaticGraph>,
    step: F,
) -> (Orchestrator<StaticGraph>, R)
where
    R: Send + 'static,
    F: FnOnce(&mut Orchestrator<StaticGraph>) -> R + Send + 'static,
{
    let span = tracing::Span::current();
    let task = tokio::task::spawn_blocking(move || {
        let _guard = span.enter();
        let result = step(&mut orchestrator);
        (orchestrator, result)
    });
    match task.await {
        Ok(done) => done,
        Err(e) => match e.try_into_panic() {
            // Double construct is a programming error; keep it a panic.
            Ok(payload) => std::panic::resume_unwind(payload),
            Err(e) => panic!("orchestrator task was cancelled: {e}"),
        },
    }
}
