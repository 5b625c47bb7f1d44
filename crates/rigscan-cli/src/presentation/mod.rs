//! Shared CLI presentation utilities.
//!
//! Format-only: values arrive fully detected and normalized.

mod tables;

pub use tables::{format_games_table, format_launchers, format_specs, truncate_string};
