use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use ahash::AHashMap;
use parking_lot::RwLock;
use tokio::net::UdpSocket;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::utp::structs::connection_key::ConnectionKey;
use crate::utp::structs::utp_connection::UtpConnection;

#[derive(Debug)]
pub struct ConnectionRegistry {
    pub(crate) socket: Arc<UdpSocket>,
    pub(crate) statistics: Arc<TrafficStatistics>,
    pub(crate) connections: RwLock<AHashMap<ConnectionKey, Arc<UtpConnection>>>,
    pub(crate) created: AtomicU64,
}
