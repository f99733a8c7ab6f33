use std::fmt;
use std::fmt::Formatter;
use std::net::SocketAddr;
use crate::utp::structs::connection_key::ConnectionKey;

impl ConnectionKey {
    pub fn new(connection_id: u16, remote_addr: SocketAddr) -> ConnectionKey {
        ConnectionKey { connection_id, remote_addr }
    }
}

impl fmt::Display for ConnectionKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.connection_id, self.remote_addr)
    }
}
