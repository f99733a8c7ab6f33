use std::fmt;
use std::fmt::Formatter;
use std::hash::{Hash, Hasher};
use sha1::{Digest, Sha1};
use crate::common::common::url_encode;
use crate::identity::enums::identity_error::IdentityError;
use crate::identity::identity::{decode_base32_hash, decode_hex_hash, HASH_BASE32_LENGTH, HASH_HEX_LENGTH, HASH_LENGTH};
use crate::identity::structs::info_hash::InfoHash;

impl InfoHash {
    fn with_digest(hash: [u8; HASH_LENGTH]) -> InfoHash {
        InfoHash {
            hash,
            hash_url: url_encode(&hash),
            info: None,
            size: 0,
        }
    }

    /// Hashes a raw info dictionary. Never fails.
    pub fn from_info(data: &[u8]) -> InfoHash {
        let digest = Sha1::digest(data);
        let mut hash = [0u8; HASH_LENGTH];
        hash.copy_from_slice(&digest);
        let mut info_hash = Self::with_digest(hash);
        info_hash.size = data.len();
        info_hash.info = Some(data.to_vec());
        info_hash
    }

    /// Accepts a 40-character hex or 32-character base-32 hash, surrounding whitespace ignored.
    pub fn from_hash(value: &str) -> Result<InfoHash, IdentityError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(IdentityError::EmptyHash);
        }
        let decoded = match value.len() {
            HASH_HEX_LENGTH => decode_hex_hash(value),
            HASH_BASE32_LENGTH => decode_base32_hash(value),
            _ => None
        };
        decoded
            .map(Self::with_digest)
            .ok_or_else(|| IdentityError::UnsupportedHash(value.to_string()))
    }

    pub fn hash(&self) -> &[u8; HASH_LENGTH] {
        &self.hash
    }

    /// Lowercase 40-character hex form.
    pub fn hash_hex(&self) -> String {
        hex::encode(self.hash)
    }

    pub fn hash_url(&self) -> &str {
        &self.hash_url
    }

    pub fn info(&self) -> Option<&[u8]> {
        self.info.as_deref()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Attaches metadata fetched after the hash was created from a magnet link.
    /// The digest is left untouched.
    pub fn set_info(&mut self, data: Vec<u8>) {
        self.size = data.len();
        self.info = Some(data);
    }
}

impl PartialEq for InfoHash {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for InfoHash {}

impl Hash for InfoHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.hash_hex())
    }
}

impl std::str::FromStr for InfoHash {
    type Err = IdentityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InfoHash::from_hash(s)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hash_hex())
    }
}
