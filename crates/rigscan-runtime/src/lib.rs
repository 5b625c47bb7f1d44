//! OS-facing adapters for rigscan.
//!
//! Implements the ports defined in `rigscan-core` against the local machine:
//!
//! - `library` - launcher library scanning on disk
//! - `system` - the native privileged bridge (sysinfo and command probing)
//! - `host` - host signals and a headless navigation host
//! - `frames` - an interval-driven frame source

pub mod frames;
pub mod host;
pub mod library;
pub mod system;

pub use frames::IntervalFrameSource;
pub use host::{HeadlessNavigationHost, NativeHostSignals};
pub use library::{LibraryScan, LibraryScanner};
pub use system::NativeBridge;
