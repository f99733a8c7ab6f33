//! Shared UDP socket and datagram demultiplexing.
//!
//! One socket carries three protocols at once. Every inbound datagram is
//! classified by its leading bytes and handed to the owning handler:
//!
//! 1. First byte `d` (a bencoded dictionary) goes to the DHT handler.
//! 2. First byte `0x00` or `0x01` with the STUN magic cookie `0x2112A442` at
//!    offset 4 goes to the STUN handler.
//! 3. Anything else is uTP: the big-endian u16 at offset 2 is the connection
//!    id, resolved together with the sender through the connection registry.
//!
//! Every probed offset is bounds-checked. Datagrams too short for the probe
//! they need are dropped, logged at debug and counted as malformed; the reader
//! loop keeps going.
//!
//! # Server
//!
//! `UdpServer` binds the socket through `socket2` (buffer sizes, address reuse)
//! and runs one reader task per configured thread. Handlers may block while a
//! rate ceiling paces them, so dispatch runs inside `block_in_place`.

/// Route and error enumerations.
pub mod enums;

/// Implementation blocks for classification and the server loop.
pub mod impls;

/// Classifier, server and handler data structures.
pub mod structs;

/// Protocol handler trait.
pub mod traits;

/// Header constants and the service entry point.
#[allow(clippy::module_inception)]
pub mod udp;
