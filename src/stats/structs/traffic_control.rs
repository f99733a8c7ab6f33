use std::sync::atomic::AtomicU64;
use crate::stats::structs::pace_interrupt::PaceInterrupt;

/// Ceilings in bytes per second, 0 meaning unlimited.
#[derive(Debug)]
pub struct TrafficControl {
    pub(crate) upload_limit: AtomicU64,
    pub(crate) download_limit: AtomicU64,
    pub(crate) interrupt: PaceInterrupt,
}
