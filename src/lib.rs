//! Core library for the `apisim` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, endpoint configuration parsing, the HTTP dispatch
//! port, and the simulation engine (variable resolution, body templating,
//! per-definition scheduling). The primary user-facing interface is the
//! `apisim` command-line application; library APIs may evolve as the CLI
//! grows.
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod shutdown;
pub mod simulation;

mod app;
