use std::net::SocketAddr;
use std::sync::Arc;
use log::info;
use tokio::task::JoinHandle;
use crate::config::structs::udp_server_config::UdpServerConfig;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::traits::datagram_handler::DatagramHandler;

/// First byte of a bencoded dictionary, the start of every DHT message.
pub const DHT_HEADER: u8 = b'd';
/// STUN message type high byte for requests and indications.
pub const STUN_HEADER_REQUEST: u8 = 0x00;
/// STUN message type high byte for responses.
pub const STUN_HEADER_RESPONSE: u8 = 0x01;
pub const STUN_MAGIC_COOKIE: u32 = 0x2112_A442;
pub const STUN_MAGIC_OFFSET: usize = 4;
pub const CONNECTION_ID_OFFSET: usize = 2;
/// Shortest datagram a uTP connection id can be read from.
pub const UTP_MIN_LENGTH: usize = CONNECTION_ID_OFFSET + 2;
pub const MAX_PACKET_SIZE: usize = 65_507;

/// Binds the shared socket and starts its reader tasks.
pub async fn udp_service(config: &UdpServerConfig, statistics: Arc<TrafficStatistics>, dht: Arc<dyn DatagramHandler>, stun: Arc<dyn DatagramHandler>, rx: tokio::sync::watch::Receiver<bool>) -> tokio::io::Result<(Arc<UdpServer>, Vec<JoinHandle<()>>)>
{
    let addr: SocketAddr = config.bind_address.parse().map_err(|error| {
        tokio::io::Error::new(tokio::io::ErrorKind::InvalidInput, format!("invalid bind address '{}': {}", config.bind_address, error))
    })?;
    let udp_server = Arc::new(UdpServer::new(addr, config.threads, config.recv_buffer_size, config.send_buffer_size, config.reuse_address, statistics, dht, stun)?);
    info!("[UDP] Starting a server listener on {} with {} UDP threads", udp_server.local_addr()?, config.threads);
    let handles = udp_server.start(rx);
    Ok((udp_server, handles))
}
