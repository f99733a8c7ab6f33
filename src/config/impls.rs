pub mod configuration;
pub mod configuration_error;
pub mod rate_limit_config;
