use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use crate::stats::structs::traffic_statistics::TrafficStatistics;

/// Stand-in for an external protocol endpoint: counts what it is given and
/// records it as download traffic on the shared statistics.
#[derive(Debug)]
pub struct PassiveHandler {
    pub(crate) name: String,
    pub(crate) statistics: Arc<TrafficStatistics>,
    pub(crate) handled: AtomicU64,
}
