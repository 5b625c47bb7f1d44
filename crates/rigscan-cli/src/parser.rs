//! Main CLI parser and top-level argument handling.
//!
//! Global options map onto `DetectionSettings`; every one of them can also
//! come from a `RIGSCAN_*` environment variable (or a `.env` file).

use clap::Parser;
use rigscan_core::settings::{
    DEFAULT_NOMINAL_FRAME_RATE_HZ, DEFAULT_PROTOCOL_TIMEOUT_MS, DEFAULT_SAMPLE_WINDOW_MS,
    DEFAULT_STORAGE,
};

use crate::commands::Commands;

/// Detect gaming hardware and installed games.
#[derive(Parser)]
#[command(name = "rigscan")]
#[command(about = "Detect gaming hardware and installed games")]
#[command(version)]
pub struct Cli {
    /// Skip the native OS queries and use heuristics only
    #[arg(long = "no-bridge", global = true, env = "RIGSCAN_NO_BRIDGE")]
    pub no_bridge: bool,

    /// Home directory used to expand launcher root paths
    #[arg(long = "home", global = true, env = "RIGSCAN_HOME")]
    pub home: Option<String>,

    /// Deadline for each launcher protocol probe
    #[arg(
        long = "probe-timeout-ms",
        global = true,
        env = "RIGSCAN_PROBE_TIMEOUT_MS",
        default_value_t = DEFAULT_PROTOCOL_TIMEOUT_MS
    )]
    pub probe_timeout_ms: u64,

    /// Refresh-rate sampling window
    #[arg(
        long = "sample-window-ms",
        global = true,
        env = "RIGSCAN_SAMPLE_WINDOW_MS",
        default_value_t = DEFAULT_SAMPLE_WINDOW_MS
    )]
    pub sample_window_ms: u64,

    /// Nominal frame rate of the native frame source
    #[arg(
        long = "frame-rate-hz",
        global = true,
        env = "RIGSCAN_FRAME_RATE_HZ",
        default_value_t = DEFAULT_NOMINAL_FRAME_RATE_HZ
    )]
    pub frame_rate_hz: u32,

    /// Storage class reported in system specs
    #[arg(
        long = "storage",
        global = true,
        env = "RIGSCAN_STORAGE",
        default_value = DEFAULT_STORAGE
    )]
    pub storage: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
