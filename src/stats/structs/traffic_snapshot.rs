use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrafficSnapshot {
    pub uploaded: u64,
    pub downloaded: u64,
    pub upload_speed: u64,
    pub download_speed: u64,
}
