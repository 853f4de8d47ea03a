use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::error;

use crate::http::Dispatch;
use crate::shutdown::ShutdownSender;

use super::definition::MessageDefinition;
use super::task::SimulationTask;

/// Handle over a running set of simulation tasks, one per definition.
///
/// `start` returns immediately; the caller owns the shutdown channel and
/// joins via [`Simulation::wait`] after signalling it.
pub struct Simulation {
    handles: Vec<JoinHandle<()>>,
}

impl Simulation {
    /// Spawns one task per definition. Definitions that fail to prepare are
    /// logged and skipped; they never prevent sibling definitions from
    /// running.
    pub fn start(
        definitions: Vec<MessageDefinition>,
        dispatcher: Arc<dyn Dispatch>,
        shutdown: &ShutdownSender,
    ) -> Self {
        let mut handles = Vec::with_capacity(definitions.len());
        for definition in definitions {
            let message_type = definition.message_type.clone();
            match SimulationTask::prepare(definition) {
                Ok(task) => {
                    // Subscribe before spawning so a shutdown signalled ahead
                    // of the first poll is still observed.
                    let shutdown_rx = shutdown.subscribe();
                    handles.push(tokio::spawn(task.run(
                        Arc::clone(&dispatcher),
                        shutdown.clone(),
                        shutdown_rx,
                    )));
                }
                Err(err) => {
                    error!(
                        message_type = %message_type,
                        %err,
                        "Skipping definition that failed to start"
                    );
                }
            }
        }
        Self { handles }
    }

    /// Number of tasks that started successfully.
    #[must_use]
    pub fn started(&self) -> usize {
        self.handles.len()
    }

    /// Joins every task. Tasks only exit on shutdown, so callers must signal
    /// the shutdown channel first.
    pub async fn wait(self) {
        for handle in self.handles {
            if let Err(err) = handle.await {
                error!(%err, "Simulation task did not shut down cleanly");
            }
        }
    }
}
