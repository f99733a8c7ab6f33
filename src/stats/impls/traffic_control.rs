use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use log::{debug, info};
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::stats::enums::traffic_direction::TrafficDirection;
use crate::stats::structs::pace_interrupt::PaceInterrupt;
use crate::stats::structs::traffic_control::TrafficControl;

impl TrafficControl {
    pub fn new(config: &RateLimitConfig) -> TrafficControl {
        TrafficControl {
            upload_limit: AtomicU64::new(config.upload_bytes_per_second),
            download_limit: AtomicU64::new(config.download_bytes_per_second),
            interrupt: PaceInterrupt::new(),
        }
    }

    pub fn unlimited() -> TrafficControl {
        Self::new(&RateLimitConfig::unlimited())
    }

    pub fn upload_limit(&self) -> u64 {
        self.upload_limit.load(Ordering::Relaxed)
    }

    pub fn download_limit(&self) -> u64 {
        self.download_limit.load(Ordering::Relaxed)
    }

    pub fn limit(&self, direction: TrafficDirection) -> u64 {
        match direction {
            TrafficDirection::Upload => self.upload_limit(),
            TrafficDirection::Download => self.download_limit(),
        }
    }

    pub fn set_upload_limit(&self, bytes_per_second: u64) {
        info!("[STATS] Upload limit set to {} B/s", bytes_per_second);
        self.upload_limit.store(bytes_per_second, Ordering::Relaxed);
    }

    pub fn set_download_limit(&self, bytes_per_second: u64) {
        info!("[STATS] Download limit set to {} B/s", bytes_per_second);
        self.download_limit.store(bytes_per_second, Ordering::Relaxed);
    }

    /// Ends every pacing sleep in progress and skips all later ones.
    pub fn interrupt(&self) {
        debug!("[STATS] Pacing interrupted");
        self.interrupt.interrupt();
    }

    pub fn is_interrupted(&self) -> bool {
        self.interrupt.is_interrupted()
    }

    pub(crate) fn pause(&self, duration: Duration) -> bool {
        self.interrupt.wait(duration)
    }
}
