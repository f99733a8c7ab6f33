/// Root configuration object.
pub mod configuration;

/// Shared UDP socket settings.
pub mod udp_server_config;

/// Local peer identity settings.
pub mod peer_config;

/// Upload and download ceilings.
pub mod rate_limit_config;
