use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Weak};
use std::time::Instant;
use crate::stats::structs::pace_state::PaceState;
use crate::stats::structs::speed_sampler::SpeedSampler;
use crate::stats::structs::traffic_control::TrafficControl;

#[derive(Debug)]
pub struct TrafficStatistics {
    pub(crate) parent: Option<Weak<TrafficStatistics>>,
    /// Present only on nodes that enforce a ceiling.
    pub(crate) control: Option<Arc<TrafficControl>>,
    pub(crate) origin: Instant,
    pub(crate) uploaded: AtomicU64,
    pub(crate) downloaded: AtomicU64,
    pub(crate) upload_sampler: SpeedSampler,
    pub(crate) download_sampler: SpeedSampler,
    pub(crate) upload_pace: PaceState,
    pub(crate) download_pace: PaceState,
}
