#![allow(dead_code)]
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use parking_lot::Mutex;
use tokio::net::UdpSocket;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use torrust_transport::config::structs::configuration::Configuration;
use torrust_transport::config::structs::udp_server_config::UdpServerConfig;
use torrust_transport::stats::structs::traffic_statistics::TrafficStatistics;
use torrust_transport::udp::structs::udp_server::UdpServer;
use torrust_transport::udp::traits::datagram_handler::DatagramHandler;
use torrust_transport::udp::udp::{udp_service, STUN_MAGIC_COOKIE};

pub type TestStatistics = Arc<TrafficStatistics>;

#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub datagrams: Mutex<Vec<(Vec<u8>, SocketAddr)>>,
}

impl RecordingHandler {
    pub fn count(&self) -> usize {
        self.datagrams.lock().len()
    }
}

impl DatagramHandler for RecordingHandler {
    fn handle(&self, data: &[u8], remote_addr: SocketAddr) {
        self.datagrams.lock().push((data.to_vec(), remote_addr));
    }
}

pub struct TestServer {
    pub server: Arc<UdpServer>,
    pub handles: Vec<JoinHandle<()>>,
    pub shutdown: watch::Sender<bool>,
    pub statistics: TestStatistics,
    pub dht: Arc<RecordingHandler>,
    pub stun: Arc<RecordingHandler>,
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.udp_server = create_test_udp_config();
    config
}

pub fn create_test_udp_config() -> UdpServerConfig {
    UdpServerConfig {
        enabled: true,
        bind_address: "127.0.0.1:0".to_string(),
        threads: 2,
        recv_buffer_size: 262_144,
        send_buffer_size: 262_144,
        reuse_address: false,
    }
}

pub async fn start_test_server() -> TestServer {
    let statistics = Arc::new(TrafficStatistics::root());
    let dht = Arc::new(RecordingHandler::default());
    let stun = Arc::new(RecordingHandler::default());
    let (shutdown, rx) = watch::channel(false);
    let (server, handles) = udp_service(&create_test_udp_config(), statistics.clone(), dht.clone(), stun.clone(), rx)
        .await
        .unwrap();
    TestServer { server, handles, shutdown, statistics, dht, stun }
}

pub async fn client_socket() -> UdpSocket {
    UdpSocket::bind("127.0.0.1:0").await.unwrap()
}

pub fn stun_binding_request() -> Vec<u8> {
    let mut data = vec![0x00, 0x01, 0x00, 0x00];
    data.extend_from_slice(&STUN_MAGIC_COOKIE.to_be_bytes());
    data.extend_from_slice(&[7u8; 12]);
    data
}

pub fn utp_syn(connection_id: u16) -> Vec<u8> {
    let mut data = vec![0x41, 0x00];
    data.extend_from_slice(&connection_id.to_be_bytes());
    data.extend_from_slice(&[0u8; 16]);
    data
}

/// Polls `condition` until it holds or two seconds pass.
pub async fn wait_until<F: Fn() -> bool>(condition: F) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}
