use std::sync::atomic::Ordering;
use crate::udp::enums::datagram_route::DatagramRoute;
use crate::udp::structs::udp_counters::{UdpCounters, UdpCountersSnapshot};

impl UdpCounters {
    pub fn new() -> UdpCounters {
        UdpCounters::default()
    }

    pub fn received(&self) {
        self.received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn routed(&self, route: &DatagramRoute) {
        let counter = match route {
            DatagramRoute::Dht => &self.dht,
            DatagramRoute::Stun => &self.stun,
            DatagramRoute::Utp(_) => &self.utp,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn malformed(&self) {
        self.malformed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> UdpCountersSnapshot {
        UdpCountersSnapshot {
            received: self.received.load(Ordering::Relaxed),
            dht: self.dht.load(Ordering::Relaxed),
            stun: self.stun.load(Ordering::Relaxed),
            utp: self.utp.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
        }
    }
}
