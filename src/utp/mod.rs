//! uTP connection registry.
//!
//! Datagrams that are neither DHT nor STUN belong to a uTP connection. The
//! registry maps the pair (connection id, remote endpoint) to a live
//! `UtpConnection`, creating one the first time an unknown pair shows up.
//!
//! # Guarantees
//!
//! - Resolving the same pair always returns the same handle until it is removed.
//! - Concurrent first arrivals for one pair create exactly one connection.
//! - After `remove`, the next datagram for that pair gets a fresh connection.
//!
//! The registry has no size bound; idle connections are closed by their own
//! state machine, which calls `UtpConnection::close()`.

/// Implementation blocks for registry and connection handles.
pub mod impls;

/// Registry data structures.
pub mod structs;

/// Constants.
#[allow(clippy::module_inception)]
pub mod utp;
