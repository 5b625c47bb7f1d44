//! On-disk launcher library scanning.

mod scanner;

pub use scanner::{LibraryScan, LibraryScanner, SCANNABLE_LAUNCHERS};
