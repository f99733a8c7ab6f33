pub mod connection_key;
pub mod utp_connection;
pub mod connection_registry;
