use std::sync::Arc;
use crate::utp::structs::utp_connection::UtpConnection;

#[derive(Debug, Clone)]
pub enum DatagramRoute {
    Dht,
    Stun,
    Utp(Arc<UtpConnection>),
}
