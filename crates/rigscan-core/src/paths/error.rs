//! Path-related error types.
//!
//! An unresolvable launcher root is *not* an error (see `RootResolution`);
//! these variants cover only genuinely invalid input.

use thiserror::Error;

/// Errors that can occur while preparing path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// A home override must be absolute to be substituted into templates.
    #[error("Home directory override must be absolute: {0}")]
    RelativeHome(String),
}
