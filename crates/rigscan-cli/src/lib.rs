#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

//! The `rigscan` command-line adapter.
//!
//! `main.rs` parses arguments and initialises logging; `bootstrap` wires the
//! native adapters into a `DetectionOrchestrator`; `handlers` run one
//! command each and print through `presentation`.

#[cfg(test)]
use tempfile as _;

// Used by the binary target only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
