use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::join_all;
use log::{debug, error, info};
use parking_lot::deadlock;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use torrust_transport::common::common::{setup_logging, shutdown_waiting};
use torrust_transport::config::structs::configuration::Configuration;
use torrust_transport::identity::structs::peer_identity::PeerIdentity;
use torrust_transport::stats::structs::traffic_control::TrafficControl;
use torrust_transport::stats::structs::traffic_statistics::TrafficStatistics;
use torrust_transport::structs::Cli;
use torrust_transport::udp::structs::passive_handler::PassiveHandler;
use torrust_transport::udp::udp::udp_service;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    if let Err(error) = setup_logging(&config) {
        eprintln!("[ERROR] {}", error);
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let identity = PeerIdentity::from_config(&config);
            info!("[BOOT] Peer id: {}", identity.peer_id());

            let traffic_control = Arc::new(TrafficControl::new(&config.rate_limit));
            let statistics = Arc::new(TrafficStatistics::limited(traffic_control.clone()));
            if config.rate_limit.is_limited() {
                info!(
                    "[BOOT] Rate limits - Upload: {} B/s - Download: {} B/s",
                    traffic_control.upload_limit(), traffic_control.download_limit()
                );
            }

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let deadlocks_handler = tokio_shutdown.clone();
            tokio::spawn(async move {
                info!("[BOOT] Starting thread for deadlocks...");
                loop {
                    if shutdown_waiting(Duration::from_secs(30), deadlocks_handler.clone()).await {
                        info!("[BOOT] Shutting down thread for deadlocks...");
                        return;
                    }
                    let deadlocks = deadlock::check_deadlock();
                    if !deadlocks.is_empty() {
                        info!("[DEADLOCK] Found {} deadlocks", deadlocks.len());
                        for (i, threads) in deadlocks.iter().enumerate() {
                            info!("[DEADLOCK] #{i}");
                            for t in threads {
                                info!("[DEADLOCK] Thread ID: {:#?}", t.thread_id());
                                info!("[DEADLOCK] {:#?}", t.backtrace());
                            }
                        }
                    }
                }
            });

            let (udp_tx, udp_rx) = tokio::sync::watch::channel(false);
            let mut udp_handles = Vec::new();
            let mut udp_server = None;

            if config.udp_server.enabled {
                let dht = Arc::new(PassiveHandler::new("DHT", statistics.clone()));
                let stun = Arc::new(PassiveHandler::new("STUN", statistics.clone()));
                match udp_service(&config.udp_server, statistics.clone(), dht, stun, udp_rx.clone()).await {
                    Ok((server, handles)) => {
                        udp_handles = handles;
                        udp_server = Some(server);
                    }
                    Err(error) => {
                        error!("Could not listen to the UDP port: {error}");
                        exit(1);
                    }
                }
            }

            let stats_handler = tokio_shutdown.clone();
            let stats_statistics = statistics.clone();
            let stats_server = udp_server.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                loop {
                    if shutdown_waiting(Duration::from_secs(console_interval), stats_handler.clone()).await {
                        info!("[BOOT] Shutting down thread for console updates...");
                        return;
                    }

                    let traffic = stats_statistics.snapshot();
                    info!(
                        "[STATS] Uploaded: {} ({} B/s) - Downloaded: {} ({} B/s)",
                        traffic.uploaded, traffic.upload_speed, traffic.downloaded, traffic.download_speed
                    );
                    debug!("[STATS] {}", serde_json::to_string(&traffic).unwrap_or_default());

                    if let Some(server) = &stats_server {
                        let counters = server.counters().snapshot();
                        info!(
                            "[STATS UDP] Recv:{} DHT:{} STUN:{} uTP:{} Malformed:{} | Connections: {} (created {})",
                            counters.received, counters.dht, counters.stun, counters.utp, counters.malformed,
                            server.registry().len(), server.registry().created()
                        );
                    }
                }
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    traffic_control.interrupt();
                    let _ = udp_tx.send(true);

                    for result in join_all(udp_handles).await {
                        if let Err(error) = result {
                            error!("Errors happened on shutting down UDP sockets: {error}");
                        }
                    }

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    let traffic = statistics.snapshot();
                    info!("[STATS] Final - Uploaded: {} - Downloaded: {}", traffic.uploaded, traffic.downloaded);
                    info!("Server shutting down completed");
                    Ok(())
                }
            }
        })
}
