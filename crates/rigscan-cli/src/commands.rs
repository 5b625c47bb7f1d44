//! Available `rigscan` subcommands.

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// List installed games
    Games {
        /// Print the records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Estimate CPU, GPU, RAM and monitor specs
    Specs {
        /// Print the specs as JSON
        #[arg(long)]
        json: bool,
    },

    /// Probe launcher protocol handlers
    Launchers,

    /// Show resolved launcher install roots
    Paths,
}
