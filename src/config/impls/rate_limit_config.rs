use crate::config::structs::rate_limit_config::RateLimitConfig;

impl RateLimitConfig {
    pub fn unlimited() -> RateLimitConfig {
        RateLimitConfig::default()
    }

    pub fn is_limited(&self) -> bool {
        self.upload_bytes_per_second > 0 || self.download_bytes_per_second > 0
    }
}
