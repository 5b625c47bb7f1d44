//! Launcher install-root resolution.
//!
//! # Design
//!
//! - The candidate table is data (`PathTable`), injected into the resolver
//!   so tests can substitute synthetic tables
//! - Missing roots resolve to `NotApplicable`, never to `PathError`
//! - Home expansion is a leading-`~` string substitution, nothing more

mod error;
mod platform;
mod resolver;
mod table;

pub use error::PathError;
pub use platform::{HOME_PLACEHOLDER, expand_home, normalize_home_override};
pub use resolver::{NotApplicableReason, PathResolver, ResolvedRoots, RootResolution};
pub use table::{LauncherRootPath, PathTable};
