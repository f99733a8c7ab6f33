use std::fmt::Debug;
use std::net::SocketAddr;

/// Implemented by the DHT and STUN endpoints and by uTP connections.
///
/// `handle` is called from the socket reader tasks and may block while
/// traffic accounting paces the caller.
pub trait DatagramHandler: Debug + Send + Sync {
    fn handle(&self, data: &[u8], remote_addr: SocketAddr);
}
