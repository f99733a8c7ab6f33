use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;
use crate::common::common::run_blocking;
use crate::stats::structs::traffic_statistics::TrafficStatistics;
use crate::udp::structs::datagram_classifier::DatagramClassifier;
use crate::udp::structs::udp_counters::UdpCounters;
use crate::udp::structs::udp_server::UdpServer;
use crate::udp::traits::datagram_handler::DatagramHandler;
use crate::udp::udp::MAX_PACKET_SIZE;
use crate::utp::structs::connection_registry::ConnectionRegistry;

impl UdpServer {
    #[allow(clippy::too_many_arguments)]
    #[tracing::instrument(level = "debug", skip(statistics, dht, stun))]
    pub fn new(bind_address: SocketAddr, threads: u64, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool, statistics: Arc<TrafficStatistics>, dht: Arc<dyn DatagramHandler>, stun: Arc<dyn DatagramHandler>) -> tokio::io::Result<UdpServer>
    {
        let socket = Arc::new(Self::bind(bind_address, recv_buffer_size, send_buffer_size, reuse_address)?);
        let registry = Arc::new(ConnectionRegistry::new(socket.clone(), statistics));
        Ok(UdpServer {
            socket,
            classifier: Arc::new(DatagramClassifier::new(dht, stun, registry)),
            counters: Arc::new(UdpCounters::new()),
            threads: threads.max(1),
        })
    }

    /// Creates the non-blocking socket and hands it to Tokio. Must be called inside a runtime.
    pub fn bind(bind_address: SocketAddr, recv_buffer_size: usize, send_buffer_size: usize, reuse_address: bool) -> tokio::io::Result<UdpSocket>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;

        socket.set_recv_buffer_size(recv_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_send_buffer_size(send_buffer_size).map_err(tokio::io::Error::other)?;
        socket.set_reuse_address(reuse_address).map_err(tokio::io::Error::other)?;
        socket.bind(&bind_address.into()).map_err(tokio::io::Error::other)?;
        socket.set_nonblocking(true).map_err(tokio::io::Error::other)?;

        let std_socket: std::net::UdpSocket = socket.into();
        let tokio_socket = UdpSocket::from_std(std_socket)?;

        let sock_ref = socket2::SockRef::from(&tokio_socket);
        let actual_recv = sock_ref.recv_buffer_size().unwrap_or(0);
        let actual_send = sock_ref.send_buffer_size().unwrap_or(0);
        info!("[UDP] Socket created with buffers - Recv: {} bytes, Send: {} bytes", actual_recv, actual_send);

        Ok(tokio_socket)
    }

    /// Spawns one reader task per thread. Each stops when `rx` changes.
    pub fn start(&self, rx: tokio::sync::watch::Receiver<bool>) -> Vec<JoinHandle<()>>
    {
        (0..self.threads).map(|thread_id| {
            let socket = self.socket.clone();
            let classifier = self.classifier.clone();
            let counters = self.counters.clone();
            let mut rx = rx.clone();

            tokio::spawn(async move {
                let mut data = vec![0u8; MAX_PACKET_SIZE];
                loop {
                    tokio::select! {
                        _ = rx.changed() => {
                            info!("[UDP] Stopping UDP server thread {}...", thread_id);
                            break;
                        }
                        result = socket.recv_from(&mut data) => {
                            match result {
                                Ok((valid_bytes, remote_addr)) => {
                                    let payload = &data[..valid_bytes];
                                    run_blocking(|| Self::handle_datagram(&classifier, &counters, payload, remote_addr));
                                }
                                Err(e) => match e.kind() {
                                    std::io::ErrorKind::WouldBlock => tokio::task::yield_now().await,
                                    _ => error!("[UDP] Thread {} recv_from error: {}", thread_id, e),
                                }
                            }
                        }
                    }
                }
            })
        }).collect()
    }

    /// Routes one datagram; malformed ones are counted and dropped.
    pub fn handle_datagram(classifier: &DatagramClassifier, counters: &UdpCounters, payload: &[u8], remote_addr: SocketAddr)
    {
        counters.received();
        match classifier.dispatch(payload, remote_addr) {
            Ok(route) => counters.routed(&route),
            Err(error) => {
                counters.malformed();
                debug!("[UDP] Dropping datagram from {}: {}", remote_addr, error);
            }
        }
    }

    pub fn local_addr(&self) -> tokio::io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub fn socket(&self) -> &Arc<UdpSocket> {
        &self.socket
    }

    pub fn classifier(&self) -> &Arc<DatagramClassifier> {
        &self.classifier
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        self.classifier.registry()
    }

    pub fn counters(&self) -> &Arc<UdpCounters> {
        &self.counters
    }
}
