use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use log::debug;
use crate::stats::enums::traffic_direction::TrafficDirection;
use crate::stats::structs::pace_state::PaceState;
use crate::stats::structs::speed_sampler::SpeedSampler;
use crate::stats::structs::traffic_control::TrafficControl;
use crate::stats::structs::traffic_snapshot::TrafficSnapshot;
use crate::stats::structs::traffic_statistics::TrafficStatistics;

pub const PACE_INTERVAL_MILLIS: u64 = 1000;

impl TrafficStatistics {
    pub fn new(parent: Option<&Arc<TrafficStatistics>>, control: Option<Arc<TrafficControl>>) -> TrafficStatistics {
        TrafficStatistics {
            parent: parent.map(Arc::downgrade),
            control,
            origin: Instant::now(),
            uploaded: AtomicU64::new(0),
            downloaded: AtomicU64::new(0),
            upload_sampler: SpeedSampler::new(),
            download_sampler: SpeedSampler::new(),
            upload_pace: PaceState::new(),
            download_pace: PaceState::new(),
        }
    }

    /// Unlimited node without a parent.
    pub fn root() -> TrafficStatistics {
        Self::new(None, None)
    }

    pub fn limited(control: Arc<TrafficControl>) -> TrafficStatistics {
        Self::new(None, Some(control))
    }

    pub fn child_of(parent: &Arc<TrafficStatistics>) -> TrafficStatistics {
        Self::new(Some(parent), None)
    }

    pub fn parent(&self) -> Option<Arc<TrafficStatistics>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    pub fn is_limited(&self) -> bool {
        self.control.is_some()
    }

    pub fn upload(&self, bytes: u64) {
        self.record(TrafficDirection::Upload, bytes);
    }

    pub fn download(&self, bytes: u64) {
        self.record(TrafficDirection::Download, bytes);
    }

    pub fn record(&self, direction: TrafficDirection, bytes: u64) {
        if let Some(parent) = self.parent() {
            parent.record(direction, bytes);
        }

        let (sampler, total, pace) = self.parts(direction);
        sampler.sample(bytes);
        total.fetch_add(bytes, Ordering::Relaxed);

        match self.control.as_deref() {
            Some(control) if control.limit(direction) > 0 => {
                self.pace(control, pace, bytes, control.limit(direction));
            }
            _ => {
                let now = self.now_millis();
                if now.saturating_sub(pace.checkpoint()) >= PACE_INTERVAL_MILLIS {
                    pace.checkpoint.store(now, Ordering::Release);
                }
            }
        }
    }

    #[tracing::instrument(level = "debug", skip(self, control, pace))]
    fn pace(&self, control: &TrafficControl, pace: &PaceState, bytes: u64, limit: u64) {
        let buffered = pace.buffered.fetch_add(bytes, Ordering::AcqRel).saturating_add(bytes);
        let interval = self.now_millis().saturating_sub(pace.checkpoint());
        if buffered < limit && interval < PACE_INTERVAL_MILLIS {
            return;
        }

        let _guard = pace.lock.lock();
        if pace.buffered() == buffered {
            let expected = expected_millis(buffered, limit);
            if interval < expected {
                let wait = expected - interval;
                debug!("[STATS] Pacing {} bytes, sleeping {} ms", buffered, wait);
                if control.pause(Duration::from_millis(wait)) {
                    debug!("[STATS] Pacing sleep interrupted");
                }
            }
            pace.buffered.store(0, Ordering::Release);
            pace.checkpoint.store(self.now_millis(), Ordering::Release);
        } else {
            // Another caller already took the decision for this window.
            pace.buffered.fetch_add(bytes, Ordering::AcqRel);
        }
    }

    pub fn upload_speed(&self) -> u64 {
        self.upload_sampler.speed()
    }

    pub fn download_speed(&self) -> u64 {
        self.download_sampler.speed()
    }

    pub fn upload_size(&self) -> u64 {
        self.uploaded.load(Ordering::Relaxed)
    }

    pub fn download_size(&self) -> u64 {
        self.downloaded.load(Ordering::Relaxed)
    }

    /// Seeds the upload total from persisted state. Totals never decrease.
    pub fn restore_upload_size(&self, bytes: u64) {
        self.uploaded.fetch_max(bytes, Ordering::Relaxed);
    }

    pub fn restore_download_size(&self, bytes: u64) {
        self.downloaded.fetch_max(bytes, Ordering::Relaxed);
    }

    pub fn reset_upload_speed(&self) {
        self.upload_sampler.reset();
    }

    pub fn reset_download_speed(&self) {
        self.download_sampler.reset();
    }

    /// True while the last download checkpoint is less than a second old.
    pub fn downloading(&self) -> bool {
        self.now_millis().saturating_sub(self.download_pace.checkpoint()) < PACE_INTERVAL_MILLIS
    }

    pub fn snapshot(&self) -> TrafficSnapshot {
        TrafficSnapshot {
            uploaded: self.upload_size(),
            downloaded: self.download_size(),
            upload_speed: self.upload_speed(),
            download_speed: self.download_speed(),
        }
    }

    fn parts(&self, direction: TrafficDirection) -> (&SpeedSampler, &AtomicU64, &PaceState) {
        match direction {
            TrafficDirection::Upload => (&self.upload_sampler, &self.uploaded, &self.upload_pace),
            TrafficDirection::Download => (&self.download_sampler, &self.downloaded, &self.download_pace),
        }
    }

    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Milliseconds `bytes` should take at `limit` bytes per second, rounded half up.
pub fn expected_millis(bytes: u64, limit: u64) -> u64 {
    if limit == 0 {
        return 0;
    }
    bytes.saturating_mul(1000).saturating_add(limit / 2) / limit
}
