use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use log::debug;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::udp::structs::passive_handler::PassiveHandler;
use crate::udp::traits::datagram_handler::DatagramHandler;

impl PassiveHandler {
    pub fn new(name: &str, statistics: Arc<TrafficStatistics>) -> PassiveHandler {
        PassiveHandler {
            name: name.to_string(),
            statistics,
            handled: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn handled(&self) -> u64 {
        self.handled.load(Ordering::Relaxed)
    }
}

impl DatagramHandler for PassiveHandler {
    fn handle(&self, data: &[u8], remote_addr: SocketAddr) {
        self.handled.fetch_add(1, Ordering::Relaxed);
        self.statistics.download(data.len() as u64);
        debug!("[{}] {} bytes from {}", self.name, data.len(), remote_addr);
    }
}
