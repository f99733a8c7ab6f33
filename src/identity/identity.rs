/// Length of a peer id and of an info hash digest.
pub const PEER_ID_LENGTH: usize = 20;
pub const HASH_LENGTH: usize = 20;

/// Characters reserved for the version inside the peer id prefix.
pub const VERSION_LENGTH: usize = 4;

/// Longest client tag kept in the peer id prefix; longer tags are cut.
pub const CLIENT_TAG_LENGTH: usize = 8;

pub const HASH_HEX_LENGTH: usize = 40;
pub const HASH_BASE32_LENGTH: usize = 32;

const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

pub fn decode_hex_hash(value: &str) -> Option<[u8; HASH_LENGTH]> {
    if value.len() != HASH_HEX_LENGTH {
        return None;
    }
    let mut hash = [0u8; HASH_LENGTH];
    hex::decode_to_slice(value, &mut hash).ok()?;
    Some(hash)
}

/// RFC 4648 base-32 without padding, case-insensitive.
pub fn decode_base32_hash(value: &str) -> Option<[u8; HASH_LENGTH]> {
    if value.len() != HASH_BASE32_LENGTH {
        return None;
    }
    let mut hash = [0u8; HASH_LENGTH];
    let mut bits = 0u64;
    let mut bit_count = 0u32;
    let mut written = 0usize;
    for c in value.bytes() {
        let c = c.to_ascii_uppercase();
        let index = BASE32_ALPHABET.iter().position(|&x| x == c)? as u64;
        bits = (bits << 5) | index;
        bit_count += 5;
        if bit_count >= 8 {
            bit_count -= 8;
            *hash.get_mut(written)? = (bits >> bit_count) as u8;
            written += 1;
            bits &= (1 << bit_count) - 1;
        }
    }
    if written == HASH_LENGTH { Some(hash) } else { None }
}
