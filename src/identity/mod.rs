//! Identity primitives shared by every component that talks to the swarm.
//!
//! # Main Components
//!
//! - `PeerId` - 20-byte peer identifier
//! - `PeerIdentity` - The locally generated peer id plus its percent-encoded form
//! - `InfoHash` - SHA-1 content identity of a torrent, built from the raw info
//!   dictionary or from a magnet-link hash (hex or base-32)
//!
//! # Example
//!
//! ```rust
//! use torrust_transport::identity::structs::info_hash::InfoHash;
//! use torrust_transport::identity::structs::peer_identity::PeerIdentity;
//!
//! let identity = PeerIdentity::generate("TT", "0.3.1");
//! assert_eq!(identity.peer_id().0.len(), 20);
//!
//! let hash = InfoHash::from_hash("000102030405060708090a0b0c0d0e0f10111213").unwrap();
//! assert_eq!(hash.hash()[19], 0x13);
//! ```

/// Identity error enumeration.
pub mod enums;

/// Implementation blocks for identity types.
pub mod impls;

/// Identity data structures.
pub mod structs;

/// Constants and hash string decoders.
#[allow(clippy::module_inception)]
pub mod identity;

/// Unit tests for identity primitives.
pub mod tests;
