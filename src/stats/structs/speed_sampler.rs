use std::time::Instant;
use parking_lot::Mutex;

pub const SAMPLER_BUCKETS: usize = 10;
pub const SAMPLER_BUCKET_MILLIS: u64 = 100;

/// Ring of byte counts, one per 100 ms period. A bucket belongs to the period
/// stored next to it and is discarded once that period leaves the window.
#[derive(Debug)]
pub struct SpeedSampler {
    pub(crate) origin: Instant,
    pub(crate) window: Mutex<SamplerWindow>,
}

#[derive(Debug, Default)]
pub struct SamplerWindow {
    pub(crate) bytes: [u64; SAMPLER_BUCKETS],
    pub(crate) periods: [u64; SAMPLER_BUCKETS],
}
