/// Registry lookup key.
pub mod connection_key;

/// Logical uTP connection handle.
pub mod utp_connection;

/// Lookup/create table of live connections.
pub mod connection_registry;
