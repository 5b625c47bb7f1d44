//! Composition of the four hardware sub-probes.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{CpuTag, GpuTag, MonitorSpecs, RamTier};
use crate::ports::{FrameSource, HostSignals, PrivilegedBridge};

use super::cpu::probe_cpu;
use super::gpu::probe_gpu;
use super::monitor::probe_monitor;
use super::ram::probe_ram;
use super::sampler::RefreshSampler;

/// Runs the CPU, GPU, RAM and monitor sub-probes against one set of ports.
///
/// Sub-probes share no mutable state; the frame source is the only exclusive
/// resource and is locked for the duration of one sampling window.
#[derive(Clone)]
pub struct HardwareProber {
    bridge: Option<Arc<dyn PrivilegedBridge>>,
    signals: Arc<dyn HostSignals>,
    frames: Arc<Mutex<Box<dyn FrameSource>>>,
    sampler: RefreshSampler,
}

impl HardwareProber {
    pub fn new(
        bridge: Option<Arc<dyn PrivilegedBridge>>,
        signals: Arc<dyn HostSignals>,
        frames: Arc<Mutex<Box<dyn FrameSource>>>,
        sampler: RefreshSampler,
    ) -> Self {
        Self {
            bridge,
            signals,
            frames,
            sampler,
        }
    }

    fn bridge(&self) -> Option<&dyn PrivilegedBridge> {
        self.bridge.as_deref()
    }

    pub async fn probe_cpu(&self) -> CpuTag {
        probe_cpu(self.bridge(), self.signals.as_ref()).await
    }

    pub async fn probe_gpu(&self) -> GpuTag {
        probe_gpu(self.bridge(), self.signals.as_ref()).await
    }

    pub async fn probe_ram(&self) -> RamTier {
        probe_ram(self.bridge(), self.signals.as_ref()).await
    }

    pub async fn probe_monitor(&self) -> MonitorSpecs {
        probe_monitor(
            self.bridge(),
            self.signals.as_ref(),
            &self.sampler,
            &self.frames,
        )
        .await
    }
}
