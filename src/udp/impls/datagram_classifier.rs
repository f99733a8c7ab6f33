use std::net::SocketAddr;
use std::sync::Arc;
use byteorder::{BigEndian, ByteOrder};
use crate::udp::enums::classify_error::ClassifyError;
use crate::udp::enums::datagram_route::DatagramRoute;
use crate::udp::structs::datagram_classifier::DatagramClassifier;
use crate::udp::traits::datagram_handler::DatagramHandler;
use crate::udp::udp::{CONNECTION_ID_OFFSET, DHT_HEADER, STUN_HEADER_REQUEST, STUN_HEADER_RESPONSE, STUN_MAGIC_COOKIE, STUN_MAGIC_OFFSET, UTP_MIN_LENGTH};
use crate::utp::structs::connection_registry::ConnectionRegistry;

impl DatagramClassifier {
    pub fn new(dht: Arc<dyn DatagramHandler>, stun: Arc<dyn DatagramHandler>, registry: Arc<ConnectionRegistry>) -> DatagramClassifier {
        DatagramClassifier { dht, stun, registry }
    }

    /// Picks the owner of `data`. May create a uTP connection.
    pub fn classify(&self, data: &[u8], remote_addr: SocketAddr) -> Result<DatagramRoute, ClassifyError> {
        let header = *data.first().ok_or(ClassifyError::Empty)?;
        if header == DHT_HEADER {
            return Ok(DatagramRoute::Dht);
        }
        if (header == STUN_HEADER_REQUEST || header == STUN_HEADER_RESPONSE) && Self::has_stun_magic(data) {
            return Ok(DatagramRoute::Stun);
        }

        let connection_id = data.get(CONNECTION_ID_OFFSET..UTP_MIN_LENGTH)
            .map(BigEndian::read_u16)
            .ok_or(ClassifyError::TooShort { length: data.len(), required: UTP_MIN_LENGTH })?;
        Ok(DatagramRoute::Utp(self.registry.resolve(connection_id, remote_addr)))
    }

    fn has_stun_magic(data: &[u8]) -> bool {
        data.get(STUN_MAGIC_OFFSET..STUN_MAGIC_OFFSET + 4)
            .map(BigEndian::read_u32)
            .is_some_and(|magic| magic == STUN_MAGIC_COOKIE)
    }

    pub fn handler<'a>(&'a self, route: &'a DatagramRoute) -> &'a dyn DatagramHandler {
        match route {
            DatagramRoute::Dht => self.dht.as_ref(),
            DatagramRoute::Stun => self.stun.as_ref(),
            DatagramRoute::Utp(connection) => &**connection,
        }
    }

    /// Classifies `data` and hands it to its owner.
    #[tracing::instrument(level = "debug", skip(self, data))]
    pub fn dispatch(&self, data: &[u8], remote_addr: SocketAddr) -> Result<DatagramRoute, ClassifyError> {
        let route = self.classify(data, remote_addr)?;
        self.handler(&route).handle(data, remote_addr);
        Ok(route)
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        &self.registry
    }
}
