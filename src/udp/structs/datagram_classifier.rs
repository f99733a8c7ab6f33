use std::sync::Arc;
use crate::udp::traits::datagram_handler::DatagramHandler;
use crate::utp::structs::connection_registry::ConnectionRegistry;

#[derive(Debug)]
pub struct DatagramClassifier {
    pub(crate) dht: Arc<dyn DatagramHandler>,
    pub(crate) stun: Arc<dyn DatagramHandler>,
    pub(crate) registry: Arc<ConnectionRegistry>,
}
