/// Header sniffing and routing.
pub mod datagram_classifier;

/// Shared socket and reader tasks.
pub mod udp_server;

/// Atomic datagram counters.
pub mod udp_counters;

/// Handler that only accounts and logs traffic.
pub mod passive_handler;
