use std::net::SocketAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionKey {
    pub connection_id: u16,
    pub remote_addr: SocketAddr,
}
