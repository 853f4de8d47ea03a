//! CLI argument types.
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Declarative API request simulator - define message templates, parametric variables, and send frequencies, then replay them against an HTTP endpoint."
)]
pub struct SimArgs {
    /// Path to the endpoint configuration (JSON)
    #[arg(
        long = "config",
        short = 'c',
        default_value = "config.json",
        env = "APISIM_CONFIG"
    )]
    pub config: String,

    /// Enable debug logging
    #[arg(long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Send every message from a YAML document once
    Test(TestArgs),
    /// Run periodic message simulations until interrupted
    Simulate(SimulateArgs),
    /// Print the loaded endpoint configuration
    ShowConfig,
}

#[derive(Debug, Args, Clone)]
pub struct TestArgs {
    /// Path to the message document (multi-document YAML)
    #[arg(long = "data", default_value = "data.yaml")]
    pub data: String,
}

#[derive(Debug, Args, Clone)]
pub struct SimulateArgs {
    /// Path to the simulation definitions (YAML sequence)
    #[arg(long = "definitions", default_value = "simulation.yaml")]
    pub definitions: String,
}
