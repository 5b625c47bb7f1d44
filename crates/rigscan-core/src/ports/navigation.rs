//! Hidden navigation surfaces and host focus events.
//!
//! Used only by the protocol-handler probe: navigating a hidden surface to a
//! custom URL scheme makes the host lose input focus if, and only if, an
//! external handler intercepts the navigation.

use thiserror::Error;

/// Errors raised by a navigation host.
#[derive(Debug, Clone, Error)]
pub enum SurfaceError {
    /// The host cannot create hidden surfaces at all.
    #[error("Hidden navigation surfaces are not supported by this host")]
    Unsupported,

    /// Surface creation was attempted and failed.
    #[error("Failed to create hidden surface: {0}")]
    CreateFailed(String),

    /// The navigation request itself was rejected.
    #[error("Navigation to {uri} rejected: {reason}")]
    NavigationRejected { uri: String, reason: String },
}

/// Identifies a registered focus-loss listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Callback invoked at most once when the host loses input focus.
pub type FocusLossListener = Box<dyn FnOnce() + Send>;

/// A detached, invisible navigation surface.
///
/// Owned by exactly one probe invocation and consumed by `release`.
pub trait HiddenSurface: Send {
    /// Begin navigating to `uri`. Returns once the attempt has been issued.
    fn navigate(&mut self, uri: &str) -> Result<(), SurfaceError>;

    /// Detach and destroy the surface.
    fn release(self: Box<Self>);
}

/// Port for hosts that can create hidden surfaces and report focus loss.
pub trait NavigationHost: Send + Sync {
    fn create_hidden_surface(&self) -> Result<Box<dyn HiddenSurface>, SurfaceError>;

    /// Register a one-shot listener for the next focus-loss event.
    fn on_focus_lost(&self, listener: FocusLossListener) -> ListenerId;

    /// Drop a listener that has not fired yet. Unknown ids are ignored.
    fn remove_focus_listener(&self, id: ListenerId);
}
