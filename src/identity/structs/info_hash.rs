//! BitTorrent info hash identifier.

/// A torrent's content identity.
///
/// Built either from the raw info dictionary (metainfo files), in which case
/// the dictionary bytes and their length are kept, or from a hash string taken
/// from a magnet link, in which case they stay unknown until the metadata is
/// fetched from peers and attached with `set_info`.
///
/// Equality and hashing only consider the 20-byte digest.
#[derive(Clone, Debug)]
pub struct InfoHash {
    pub(crate) hash: [u8; 20],
    pub(crate) hash_url: String,
    pub(crate) info: Option<Vec<u8>>,
    pub(crate) size: usize,
}
