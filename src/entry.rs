use std::path::Path;

use clap::Parser;

use crate::args::{Command, SimArgs};
use crate::config::load_config;
use crate::config::types::EndpointConfig;
use crate::error::AppResult;

/// Parses arguments, initializes logging, and runs the selected command on
/// a multi-threaded runtime.
///
/// # Errors
///
/// Returns an error when the runtime cannot be built or the command fails.
pub fn run() -> AppResult<()> {
    let args = SimArgs::parse();

    crate::logger::init_logging(args.verbose);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: SimArgs) -> AppResult<()> {
    let config = load_config(Path::new(&args.config))?;

    match args.command {
        Command::ShowConfig => {
            print_config(&config);
            Ok(())
        }
        Command::Test(test_args) => {
            crate::app::run_test_messages(&config, Path::new(&test_args.data)).await
        }
        Command::Simulate(simulate_args) => {
            crate::app::run_simulate(&config, Path::new(&simulate_args.definitions)).await
        }
    }
}

fn print_config(config: &EndpointConfig) {
    let auth_type = if config.auth_type.is_empty() {
        "none"
    } else {
        config.auth_type.as_str()
    };
    println!("API endpoint: {}", config.api_endpoint);
    println!("Dynamic path: {}", config.dynamic_path);
    println!("Auth type:    {}", auth_type);
    println!("Username:     {}", config.username);
}
