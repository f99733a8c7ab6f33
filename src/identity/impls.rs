pub mod info_hash;
pub mod peer_id;
pub mod peer_identity;
