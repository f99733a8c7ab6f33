pub mod datagram_classifier;
pub mod datagram_route;
pub mod udp_server;
pub mod udp_counters;
pub mod passive_handler;
