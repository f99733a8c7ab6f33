use std::sync::atomic::AtomicU64;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default)]
pub struct UdpCounters {
    pub(crate) received: AtomicU64,
    pub(crate) dht: AtomicU64,
    pub(crate) stun: AtomicU64,
    pub(crate) utp: AtomicU64,
    pub(crate) malformed: AtomicU64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UdpCountersSnapshot {
    pub received: u64,
    pub dht: u64,
    pub stun: u64,
    pub utp: u64,
    pub malformed: u64,
}
