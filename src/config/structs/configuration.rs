use serde::{Deserialize, Serialize};
use crate::config::structs::peer_config::PeerConfig;
use crate::config::structs::rate_limit_config::RateLimitConfig;
use crate::config::structs::udp_server_config::UdpServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub udp_server: UdpServerConfig,
    pub peer: PeerConfig,
    pub rate_limit: RateLimitConfig
}
