use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UdpServerConfig {
    pub enabled: bool,
    pub bind_address: String,
    pub threads: u64,
    pub recv_buffer_size: usize,
    pub send_buffer_size: usize,
    pub reuse_address: bool
}
