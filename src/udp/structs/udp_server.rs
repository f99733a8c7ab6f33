use std::sync::Arc;
use tokio::net::UdpSocket;
use crate::udp::structs::datagram_classifier::DatagramClassifier;
use crate::udp::structs::udp_counters::UdpCounters;

#[derive(Debug)]
pub struct UdpServer {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) classifier: Arc<DatagramClassifier>,
    pub(crate) counters: Arc<UdpCounters>,
    pub(crate) threads: u64,
}
