use std::sync::atomic::AtomicU64;
use std::sync::Weak;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::utp::structs::connection_key::ConnectionKey;
use crate::utp::structs::connection_registry::ConnectionRegistry;

/// Receive side of one uTP connection on the shared socket.
///
/// Inbound datagrams are queued for the transport state machine, which drains
/// them with `recv()`. Traffic in both directions is recorded on a child of
/// the registry's root statistics.
#[derive(Debug)]
pub struct UtpConnection {
    pub(crate) key: ConnectionKey,
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) statistics: TrafficStatistics,
    pub(crate) inbound_sender: mpsc::Sender<Vec<u8>>,
    pub(crate) inbound_receiver: tokio::sync::Mutex<mpsc::Receiver<Vec<u8>>>,
    pub(crate) dropped: AtomicU64,
    pub(crate) registry: Weak<ConnectionRegistry>,
}
