/// Torrent content identity.
///
/// The SHA-1 digest of the info dictionary, optionally carrying the raw
/// dictionary bytes when they are known.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// The peer id this process presents to the swarm.
pub mod peer_identity;
