use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use ahash::AHashMap;
use log::debug;
use parking_lot::RwLock;
use tokio::net::UdpSocket;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::utp::structs::connection_key::ConnectionKey;
use crate::utp::structs::connection_registry::ConnectionRegistry;
use crate::utp::structs::utp_connection::UtpConnection;

impl ConnectionRegistry {
    pub fn new(socket: Arc<UdpSocket>, statistics: Arc<TrafficStatistics>) -> ConnectionRegistry {
        ConnectionRegistry {
            socket,
            statistics,
            connections: RwLock::new(AHashMap::new()),
            created: AtomicU64::new(0),
        }
    }

    /// Returns the connection owning `(connection_id, remote_addr)`, creating it on first sight.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn resolve(self: &Arc<Self>, connection_id: u16, remote_addr: SocketAddr) -> Arc<UtpConnection> {
        let key = ConnectionKey::new(connection_id, remote_addr);
        if let Some(connection) = self.connections.read().get(&key) {
            return connection.clone();
        }

        let mut connections = self.connections.write();
        connections.entry(key).or_insert_with(|| {
            self.created.fetch_add(1, Ordering::Relaxed);
            debug!("[UTP] New connection {}", key);
            Arc::new(UtpConnection::new(key, self.socket.clone(), &self.statistics, Arc::downgrade(self)))
        }).clone()
    }

    pub fn get(&self, connection_id: u16, remote_addr: SocketAddr) -> Option<Arc<UtpConnection>> {
        self.connections.read().get(&ConnectionKey::new(connection_id, remote_addr)).cloned()
    }

    pub fn remove(&self, connection_id: u16, remote_addr: SocketAddr) -> Option<Arc<UtpConnection>> {
        let key = ConnectionKey::new(connection_id, remote_addr);
        let removed = self.connections.write().remove(&key);
        if removed.is_some() {
            debug!("[UTP] Removed connection {}", key);
        }
        removed
    }

    /// Removes the entry for `connection` only if it is still the registered handle,
    /// so a late close never evicts its successor.
    pub(crate) fn release(&self, connection: &UtpConnection) {
        let mut connections = self.connections.write();
        let current = connections.get(&connection.key)
            .is_some_and(|registered| std::ptr::eq(Arc::as_ptr(registered), connection));
        if current {
            connections.remove(&connection.key);
            debug!("[UTP] Closed connection {}", connection.key);
        }
    }

    pub fn len(&self) -> usize {
        self.connections.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.read().is_empty()
    }

    /// Connections created since start, including removed ones.
    pub fn created(&self) -> u64 {
        self.created.load(Ordering::Relaxed)
    }

    pub fn socket(&self) -> &Arc<UdpSocket> {
        &self.socket
    }

    pub fn statistics(&self) -> &Arc<TrafficStatistics> {
        &self.statistics
    }
}
