use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use log::debug;
use tokio::net::UdpSocket;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use crate::common::common::run_blocking;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::udp::traits::datagram_handler::DatagramHandler;
use crate::utp::structs::connection_key::ConnectionKey;
use crate::utp::structs::connection_registry::ConnectionRegistry;
use crate::utp::structs::utp_connection::UtpConnection;
use crate::utp::utp::INBOUND_QUEUE_CAPACITY;

impl UtpConnection {
    pub fn new(key: ConnectionKey, socket: Arc<UdpSocket>, parent: &Arc<TrafficStatistics>, registry: Weak<ConnectionRegistry>) -> UtpConnection {
        let (inbound_sender, inbound_receiver) = mpsc::channel(INBOUND_QUEUE_CAPACITY);
        UtpConnection {
            key,
            socket,
            statistics: TrafficStatistics::child_of(parent),
            inbound_sender,
            inbound_receiver: tokio::sync::Mutex::new(inbound_receiver),
            dropped: AtomicU64::new(0),
            registry,
        }
    }

    pub fn key(&self) -> ConnectionKey {
        self.key
    }

    pub fn connection_id(&self) -> u16 {
        self.key.connection_id
    }

    pub fn remote_addr(&self) -> SocketAddr {
        self.key.remote_addr
    }

    pub fn statistics(&self) -> &TrafficStatistics {
        &self.statistics
    }

    /// Datagrams discarded because the inbound queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Waits for the next queued datagram.
    pub async fn recv(&self) -> Option<Vec<u8>> {
        let mut receiver = self.inbound_receiver.lock().await;
        receiver.recv().await
    }

    /// Non-blocking variant of `recv`.
    pub fn try_recv(&self) -> Option<Vec<u8>> {
        let mut receiver = self.inbound_receiver.try_lock().ok()?;
        receiver.try_recv().ok()
    }

    /// Writes `payload` to the remote endpoint through the shared socket and records the upload.
    pub async fn send(&self, payload: &[u8]) -> tokio::io::Result<usize> {
        let sent = self.socket.send_to(payload, self.key.remote_addr).await?;
        run_blocking(|| self.statistics.upload(sent as u64));
        Ok(sent)
    }

    /// Removes this connection from the registry. Later datagrams for the same
    /// key create a new connection.
    pub fn close(&self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.release(self);
        }
    }
}

impl DatagramHandler for UtpConnection {
    fn handle(&self, data: &[u8], remote_addr: SocketAddr) {
        self.statistics.download(data.len() as u64);
        match self.inbound_sender.try_send(data.to_vec()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!("[UTP] Inbound queue full for {}, dropping {} bytes from {}", self.key, data.len(), remote_addr);
            }
            Err(TrySendError::Closed(_)) => {
                debug!("[UTP] Connection {} closed, dropping datagram", self.key);
            }
        }
    }
}
