use serde::{Deserialize, Serialize};

/// Ceilings in bytes per second. `0` disables pacing for that direction.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimitConfig {
    #[serde(default)]
    pub upload_bytes_per_second: u64,
    #[serde(default)]
    pub download_bytes_per_second: u64
}
