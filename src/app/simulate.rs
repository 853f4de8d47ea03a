use std::path::Path;
use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::{info, warn};

use crate::config::types::EndpointConfig;
use crate::error::AppResult;
use crate::http::{Dispatch, HttpDispatcher};
use crate::simulation::{Simulation, load_definitions};

/// Loads the definitions document, starts the simulation, and blocks the
/// command until Ctrl-C, then signals shutdown and joins every task.
///
/// # Errors
///
/// Returns an error when the definitions document cannot be loaded, the
/// dispatcher cannot be built, or the interrupt signal cannot be installed.
pub(crate) async fn run_simulate(config: &EndpointConfig, definitions_path: &Path) -> AppResult<()> {
    let definitions = load_definitions(definitions_path)?;
    if definitions.is_empty() {
        warn!(
            path = %definitions_path.display(),
            "No message definitions found; nothing to simulate"
        );
        return Ok(());
    }

    let dispatcher: Arc<dyn Dispatch> = Arc::new(HttpDispatcher::new(config)?);
    let (shutdown_tx, _) = broadcast::channel(1);

    let simulation = Simulation::start(definitions, dispatcher, &shutdown_tx);
    if simulation.started() == 0 {
        warn!("Every definition failed to start; nothing to simulate");
        return Ok(());
    }

    info!(
        tasks = simulation.started(),
        "Simulation running; press Ctrl-C to stop"
    );
    tokio::signal::ctrl_c().await?;

    info!("Shutdown requested; stopping simulation tasks");
    drop(shutdown_tx.send(()));
    simulation.wait().await;
    Ok(())
}
