//! Deterministic port implementations for tests.
//!
//! Compiled for this crate's unit tests and for downstream crates that
//! enable the `test-utils` feature.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::GameRecord;
use crate::ports::{
    BridgeCpu, BridgeError, BridgeGpu, BridgeMonitor, BridgeResult, FocusLossListener,
    FrameSource, HiddenSurface, HostSignals, ListenerId, NavigationHost, PrivilegedBridge,
    RenderingContext, ScreenMetrics, SignalError, SignalResult, SurfaceError,
};

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// Bridge whose every answer is fixed at construction.
pub struct FakeBridge {
    cpu: BridgeResult<BridgeCpu>,
    gpu: BridgeResult<BridgeGpu>,
    ram: BridgeResult<u32>,
    monitor: BridgeResult<BridgeMonitor>,
    games: BridgeResult<Vec<GameRecord>>,
    game_calls: AtomicUsize,
}

impl FakeBridge {
    /// A bridge that answers nothing.
    pub fn unsupported() -> Self {
        let err = || BridgeError::Unsupported("fake".to_string());
        Self {
            cpu: Err(err()),
            gpu: Err(err()),
            ram: Err(err()),
            monitor: Err(err()),
            games: Err(err()),
            game_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_cpu(mut self, manufacturer: &str, brand: &str, cores: u32) -> Self {
        self.cpu = Ok(BridgeCpu {
            manufacturer: manufacturer.to_string(),
            brand: brand.to_string(),
            cores,
            speed_ghz: 3.5,
        });
        self
    }

    #[must_use]
    pub fn with_gpu(mut self, vendor: &str, model: &str) -> Self {
        self.gpu = Ok(BridgeGpu {
            vendor: vendor.to_string(),
            model: model.to_string(),
            vram_gb: None,
        });
        self
    }

    #[must_use]
    pub fn with_ram(mut self, gb: u32) -> Self {
        self.ram = Ok(gb);
        self
    }

    #[must_use]
    pub fn with_monitor(mut self, resolution: &str, refresh_rate_hz: u32, hdr: bool) -> Self {
        self.monitor = Ok(BridgeMonitor {
            resolution: resolution.to_string(),
            refresh_rate_hz,
            hdr,
        });
        self
    }

    #[must_use]
    pub fn with_games(mut self, games: Vec<GameRecord>) -> Self {
        self.games = Ok(games);
        self
    }

    #[must_use]
    pub fn with_failing_games(mut self, reason: &str) -> Self {
        self.games = Err(BridgeError::Failed(reason.to_string()));
        self
    }

    /// How many times `detect_games` was called.
    pub fn game_calls(&self) -> usize {
        self.game_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PrivilegedBridge for FakeBridge {
    async fn detect_cpu(&self) -> BridgeResult<BridgeCpu> {
        self.cpu.clone()
    }

    async fn detect_gpu(&self) -> BridgeResult<BridgeGpu> {
        self.gpu.clone()
    }

    async fn detect_ram(&self) -> BridgeResult<u32> {
        self.ram.clone()
    }

    async fn detect_monitor(&self) -> BridgeResult<BridgeMonitor> {
        self.monitor.clone()
    }

    async fn detect_games(&self) -> BridgeResult<Vec<GameRecord>> {
        self.game_calls.fetch_add(1, Ordering::SeqCst);
        self.games.clone()
    }
}

// ---------------------------------------------------------------------------
// Host signals
// ---------------------------------------------------------------------------

/// Rendering context returning fixed strings.
#[derive(Debug, Clone, Default)]
pub struct StaticRenderer {
    pub renderer: Option<String>,
    pub vendor: Option<String>,
}

impl RenderingContext for StaticRenderer {
    fn unmasked_renderer(&self) -> Option<String> {
        self.renderer.clone()
    }

    fn unmasked_vendor(&self) -> Option<String> {
        self.vendor.clone()
    }
}

/// Host signals backed by plain optional fields; `None` means "not exposed".
#[derive(Debug, Clone, Default)]
pub struct StaticHostSignals {
    pub platform_identity: Option<String>,
    pub logical_cores: Option<u32>,
    pub heap_size_limit_bytes: Option<u64>,
    pub screen: Option<ScreenMetrics>,
    pub refresh_rate_hint: Option<u32>,
    pub hdr: Option<bool>,
    pub renderer: Option<StaticRenderer>,
    /// Panic from every signal read, to exercise top-level containment.
    pub panic_on_read: bool,
}

impl StaticHostSignals {
    fn read<T: Clone>(&self, value: Option<&T>, name: &'static str) -> SignalResult<T> {
        assert!(!self.panic_on_read, "host signal {name} exploded");
        value.cloned().ok_or(SignalError::Unavailable(name))
    }
}

impl HostSignals for StaticHostSignals {
    fn platform_identity(&self) -> SignalResult<String> {
        self.read(self.platform_identity.as_ref(), "platform identity")
    }

    fn logical_cores(&self) -> SignalResult<u32> {
        self.read(self.logical_cores.as_ref(), "logical cores")
    }

    fn heap_size_limit_bytes(&self) -> SignalResult<u64> {
        self.read(self.heap_size_limit_bytes.as_ref(), "heap size limit")
    }

    fn screen_metrics(&self) -> SignalResult<ScreenMetrics> {
        self.read(self.screen.as_ref(), "screen metrics")
    }

    fn refresh_rate_hint(&self) -> SignalResult<u32> {
        self.read(self.refresh_rate_hint.as_ref(), "refresh rate")
    }

    fn hdr_supported(&self) -> SignalResult<bool> {
        self.read(self.hdr.as_ref(), "dynamic range")
    }

    fn rendering_context(&self) -> SignalResult<Box<dyn RenderingContext>> {
        self.read(self.renderer.as_ref(), "rendering context")
            .map(|renderer| Box::new(renderer) as Box<dyn RenderingContext>)
    }
}

// ---------------------------------------------------------------------------
// Navigation host
// ---------------------------------------------------------------------------

/// How a fake external handler reacts to a navigation.
#[derive(Debug, Clone, Copy)]
pub enum HandlerBehavior {
    /// Steal focus synchronously during `navigate`.
    Immediate,
    /// Steal focus after the given delay.
    Delayed(Duration),
}

#[derive(Default)]
struct HostState {
    handlers: HashMap<String, HandlerBehavior>,
    listeners: Vec<(ListenerId, FocusLossListener)>,
    next_listener: u64,
    surfaces_created: usize,
    surfaces_released: usize,
    fail_create: bool,
}

/// Navigation host with a configurable set of registered URL schemes.
#[derive(Clone, Default)]
pub struct FakeNavigationHost {
    state: Arc<Mutex<HostState>>,
}

impl FakeNavigationHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an external handler for `scheme` (e.g. `"steam://"`).
    #[must_use]
    pub fn with_handler(self, scheme: &str, behavior: HandlerBehavior) -> Self {
        self.lock().handlers.insert(scheme.to_string(), behavior);
        self
    }

    /// Make every surface creation fail.
    #[must_use]
    pub fn failing(self) -> Self {
        self.lock().fail_create = true;
        self
    }

    /// Deliver a focus-loss event to all pending listeners.
    pub fn emit_focus_loss(&self) {
        Self::fire(&self.state);
    }

    pub fn surfaces_created(&self) -> usize {
        self.lock().surfaces_created
    }

    pub fn surfaces_released(&self) -> usize {
        self.lock().surfaces_released
    }

    pub fn pending_listeners(&self) -> usize {
        self.lock().listeners.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HostState> {
        self.state.lock().expect("fake host state poisoned")
    }

    fn fire(state: &Arc<Mutex<HostState>>) {
        let listeners = std::mem::take(&mut state.lock().expect("fake host state poisoned").listeners);
        for (_, listener) in listeners {
            listener();
        }
    }
}

impl NavigationHost for FakeNavigationHost {
    fn create_hidden_surface(&self) -> Result<Box<dyn HiddenSurface>, SurfaceError> {
        let mut state = self.lock();
        if state.fail_create {
            return Err(SurfaceError::CreateFailed("fake host refuses".to_string()));
        }
        state.surfaces_created += 1;
        Ok(Box::new(FakeSurface {
            state: Arc::clone(&self.state),
        }))
    }

    fn on_focus_lost(&self, listener: FocusLossListener) -> ListenerId {
        let mut state = self.lock();
        state.next_listener += 1;
        let id = ListenerId(state.next_listener);
        state.listeners.push((id, listener));
        id
    }

    fn remove_focus_listener(&self, id: ListenerId) {
        self.lock().listeners.retain(|(existing, _)| *existing != id);
    }
}

struct FakeSurface {
    state: Arc<Mutex<HostState>>,
}

impl HiddenSurface for FakeSurface {
    fn navigate(&mut self, uri: &str) -> Result<(), SurfaceError> {
        let behavior = self
            .state
            .lock()
            .expect("fake host state poisoned")
            .handlers
            .get(uri)
            .copied();

        match behavior {
            Some(HandlerBehavior::Immediate) => FakeNavigationHost::fire(&self.state),
            Some(HandlerBehavior::Delayed(delay)) => {
                let state = Arc::clone(&self.state);
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    FakeNavigationHost::fire(&state);
                });
            }
            None => {}
        }
        Ok(())
    }

    fn release(self: Box<Self>) {
        self.state
            .lock()
            .expect("fake host state poisoned")
            .surfaces_released += 1;
    }
}

// ---------------------------------------------------------------------------
// Frames
// ---------------------------------------------------------------------------

/// Frame source on a simulated clock: returns immediately, advancing time by
/// a fixed interval per frame.
#[derive(Debug, Clone)]
pub struct SimulatedFrameSource {
    interval: Duration,
    now: Duration,
    delivered: usize,
}

impl SimulatedFrameSource {
    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            now: Duration::ZERO,
            delivered: 0,
        }
    }

    /// A display refreshing `hz` times per second.
    pub fn at_rate(hz: u32) -> Self {
        Self::with_interval(Duration::from_secs(1) / hz.max(1))
    }

    pub const fn delivered(&self) -> usize {
        self.delivered
    }
}

#[async_trait]
impl FrameSource for SimulatedFrameSource {
    async fn next_frame(&mut self) -> Duration {
        self.now += self.interval;
        self.delivered += 1;
        self.now
    }
}
