use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, error, info, warn};

use crate::config::parse_duration_value;
use crate::error::ParseError;
use crate::http::{Dispatch, RenderedMessage};
use crate::shutdown::{ShutdownReceiver, ShutdownSender};

use super::definition::MessageDefinition;
use super::template::CompiledTemplate;
use super::variables::{ResolvedVariable, resolve};

/// Drives one message definition's repeated send cycle. The resolved
/// variable state is owned exclusively by this task; no locking is needed.
pub(crate) struct SimulationTask {
    definition: MessageDefinition,
    template: CompiledTemplate,
    variables: BTreeMap<String, ResolvedVariable>,
    period: Duration,
}

impl SimulationTask {
    /// Validates and compiles one definition into a runnable task. Frequency,
    /// format, and template failures terminate only this definition;
    /// per-variable resolution failures are logged and the variable is
    /// omitted from bindings without aborting the task.
    ///
    /// # Errors
    ///
    /// Returns an error when the frequency does not parse, the format is not
    /// `json` or `xml`, or the template does not compile.
    pub(crate) fn prepare(definition: MessageDefinition) -> Result<Self, ParseError> {
        let format = definition.message_format.to_lowercase();
        if format != "json" && format != "xml" {
            return Err(ParseError::UnsupportedFormat {
                format: definition.message_format.clone(),
            });
        }

        let period = parse_duration_value(&definition.frequency).map_err(|err| {
            ParseError::Frequency {
                value: definition.frequency.clone(),
                source: err,
            }
        })?;

        let template = CompiledTemplate::compile(&definition.message)?;

        let mut variables = BTreeMap::new();
        for (name, spec) in &definition.variables {
            match resolve(spec) {
                Ok(Some(resolved)) => {
                    variables.insert(name.clone(), resolved);
                }
                Ok(None) => {
                    debug!(
                        message_type = %definition.message_type,
                        variable = %name,
                        kind = %spec.kind,
                        "Ignoring variable with unknown kind"
                    );
                }
                Err(err) => {
                    warn!(
                        message_type = %definition.message_type,
                        variable = %name,
                        %err,
                        "Skipping unresolvable variable"
                    );
                }
            }
        }

        Ok(Self {
            definition,
            template,
            variables,
            period,
        })
    }

    /// Runs the periodic send loop: one cycle immediately, then one per
    /// timer fire, until the shutdown channel signals. The receiver must be
    /// subscribed before the task is spawned or an early signal is missed.
    pub(crate) async fn run(
        mut self,
        dispatcher: Arc<dyn Dispatch>,
        shutdown: ShutdownSender,
        mut shutdown_rx: ShutdownReceiver,
    ) {
        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            message_type = %self.definition.message_type,
            period = ?self.period,
            "Simulation task started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.cycle(&dispatcher, &shutdown),
                _ = shutdown_rx.recv() => {
                    debug!(message_type = %self.definition.message_type, "Simulation task stopping");
                    break;
                }
            }
        }
    }

    /// One cycle: exhaustion check, binding snapshot, render, dispatch, and
    /// queue advancement. The dispatch itself is spawned so a slow endpoint
    /// never delays the next tick; queues advance whether or not the send
    /// succeeds.
    pub(crate) fn cycle(&mut self, dispatcher: &Arc<dyn Dispatch>, shutdown: &ShutdownSender) {
        if self.variables.values().any(ResolvedVariable::is_exhausted) {
            debug!(
                message_type = %self.definition.message_type,
                "Skipping cycle: a queue variable is exhausted"
            );
            return;
        }

        let bindings = self.snapshot_bindings();
        let body = match self.template.render(&bindings) {
            Ok(body) => body,
            Err(err) => {
                warn!(
                    message_type = %self.definition.message_type,
                    %err,
                    "Render failed; skipping cycle"
                );
                return;
            }
        };

        let message = RenderedMessage {
            format: self.definition.message_format.clone(),
            message_type: self.definition.message_type.clone(),
            body,
        };
        let dispatcher = Arc::clone(dispatcher);
        let mut cancel = shutdown.subscribe();
        tokio::spawn(async move {
            tokio::select! {
                outcome = dispatcher.send(&message) => match outcome {
                    Ok(status) => info!(
                        message_type = %message.message_type,
                        %status,
                        "Message sent"
                    ),
                    Err(err) => error!(
                        message_type = %message.message_type,
                        %err,
                        "Error sending message"
                    ),
                },
                _ = cancel.recv() => {}
            }
        });

        for variable in self.variables.values_mut() {
            variable.advance();
        }
    }

    fn snapshot_bindings(&self) -> BTreeMap<String, String> {
        self.variables
            .iter()
            .filter_map(|(name, variable)| {
                variable.current_value().map(|value| (name.clone(), value))
            })
            .collect()
    }
}
