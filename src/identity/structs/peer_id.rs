//! BitTorrent peer identifier.

/// A 20-byte peer id as exchanged in handshakes and tracker announces.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
