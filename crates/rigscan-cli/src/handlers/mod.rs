//! Command handlers.
//!
//! Each handler is a thin wrapper: call the orchestrator or resolver from
//! `CliContext`, then print through `presentation`. No detection logic
//! lives here.

pub mod games;
pub mod launchers;
pub mod paths;
pub mod specs;
