use std::time::Instant;
use parking_lot::Mutex;
use crate::stats::structs::speed_sampler::{SamplerWindow, SpeedSampler, SAMPLER_BUCKETS, SAMPLER_BUCKET_MILLIS};

impl SpeedSampler {
    pub fn new() -> SpeedSampler {
        SpeedSampler {
            origin: Instant::now(),
            window: Mutex::new(SamplerWindow::default()),
        }
    }

    fn current_period(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64 / SAMPLER_BUCKET_MILLIS
    }

    pub fn sample(&self, bytes: u64) {
        let mut window = self.window.lock();
        let period = self.current_period();
        let index = (period % SAMPLER_BUCKETS as u64) as usize;
        if window.periods[index] != period {
            window.periods[index] = period;
            window.bytes[index] = 0;
        }
        window.bytes[index] = window.bytes[index].saturating_add(bytes);
    }

    /// Bytes per second over the trailing second.
    pub fn speed(&self) -> u64 {
        let window = self.window.lock();
        // Read the clock under the lock so no bucket can be newer than `period`.
        let period = self.current_period();
        // The window spans exactly one second, so the live sum is already a per-second rate.
        window.periods.iter()
            .zip(window.bytes.iter())
            .filter(|(bucket_period, _)| period.saturating_sub(**bucket_period) < SAMPLER_BUCKETS as u64)
            .map(|(_, bytes)| *bytes)
            .sum()
    }

    pub fn reset(&self) {
        let mut window = self.window.lock();
        *window = SamplerWindow::default();
    }
}

impl Default for SpeedSampler {
    fn default() -> Self {
        Self::new()
    }
}
