//! Protocol-handler probe.
//!
//! Detects whether an external handler is registered for a URL scheme when
//! the launcher's files cannot be inspected directly. A hidden surface is
//! navigated to the scheme; if a handler intercepts, the host loses input
//! focus. The probe races that focus-loss event against a fixed timer and
//! takes whichever fires first.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::domain::{Launcher, LauncherPresenceSet};
use crate::error::DetectionError;
use crate::ports::NavigationHost;
use crate::settings::DEFAULT_PROTOCOL_TIMEOUT_MS;

/// How a single protocol probe resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The host lost focus: a handler intercepted the navigation.
    Detected,
    /// The deadline passed without a focus loss.
    TimedOut,
    /// The hidden surface could not be created or navigated.
    Unavailable,
}

impl ProbeOutcome {
    pub const fn is_registered(self) -> bool {
        matches!(self, Self::Detected)
    }
}

/// First-writer-wins completion shared by the focus listener and the timer.
struct Settlement {
    settled: AtomicBool,
    sender: Mutex<Option<oneshot::Sender<ProbeOutcome>>>,
}

impl Settlement {
    fn new(sender: oneshot::Sender<ProbeOutcome>) -> Self {
        Self {
            settled: AtomicBool::new(false),
            sender: Mutex::new(Some(sender)),
        }
    }

    /// Resolve the probe. Returns `false` if another signal already did.
    fn settle(&self, outcome: ProbeOutcome) -> bool {
        if self.settled.swap(true, Ordering::AcqRel) {
            return false;
        }
        let sender = self.sender.lock().ok().and_then(|mut slot| slot.take());
        if let Some(sender) = sender {
            let _ = sender.send(outcome);
        }
        true
    }
}

/// Races focus loss against a timeout on a hidden navigation surface.
#[derive(Clone)]
pub struct ProtocolProbe {
    host: Arc<dyn NavigationHost>,
    timeout: Duration,
}

impl ProtocolProbe {
    pub fn new(host: Arc<dyn NavigationHost>, timeout: Duration) -> Self {
        Self { host, timeout }
    }

    /// Probe with the default 100 ms deadline.
    pub fn with_default_timeout(host: Arc<dyn NavigationHost>) -> Self {
        Self::new(host, Duration::from_millis(DEFAULT_PROTOCOL_TIMEOUT_MS))
    }

    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe one URL scheme, e.g. `"steam://"`.
    ///
    /// Resolves exactly once, within the configured timeout. The hidden
    /// surface is released before this returns, whichever signal won.
    pub async fn probe(&self, scheme: &str) -> ProbeOutcome {
        let mut surface = match self.host.create_hidden_surface() {
            Ok(surface) => surface,
            Err(e) => {
                debug!(scheme, error = %e, "Hidden surface unavailable; treating as not registered");
                return ProbeOutcome::Unavailable;
            }
        };

        let (tx, rx) = oneshot::channel();
        let settlement = Arc::new(Settlement::new(tx));

        let on_focus = Arc::clone(&settlement);
        let listener = self.host.on_focus_lost(Box::new(move || {
            on_focus.settle(ProbeOutcome::Detected);
        }));

        let on_timer = Arc::clone(&settlement);
        let timeout = self.timeout;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            on_timer.settle(ProbeOutcome::TimedOut);
        });

        if let Err(e) = surface.navigate(scheme) {
            debug!(scheme, error = %e, "Navigation rejected");
            settlement.settle(ProbeOutcome::Unavailable);
        }

        let outcome = rx.await.unwrap_or(ProbeOutcome::TimedOut);

        timer.abort();
        self.host.remove_focus_listener(listener);
        surface.release();

        if outcome == ProbeOutcome::TimedOut {
            debug!(
                "{}",
                DetectionError::ProbeTimeout {
                    scheme: scheme.to_string()
                }
            );
        } else {
            debug!(scheme, ?outcome, "Protocol probe resolved");
        }
        outcome
    }

    /// Probe every launcher's scheme in declared order.
    pub async fn detect_launchers(&self) -> LauncherPresenceSet {
        let mut presence = LauncherPresenceSet::default();
        for launcher in Launcher::ALL {
            let outcome = self.probe(launcher.scheme()).await;
            presence.set(launcher, outcome.is_registered());
        }
        if presence == LauncherPresenceSet::default() {
            warn!("No launcher protocol handlers detected");
        }
        presence
    }
}
