#[cfg(test)]
mod identity_tests {
    mod info_hash_tests {
        use sha1::{Digest, Sha1};
        use crate::identity::enums::identity_error::IdentityError;
        use crate::identity::structs::info_hash::InfoHash;

        const HEX: &str = "000102030405060708090a0b0c0d0e0f10111213";
        const BASE32: &str = "AAAQEAYEAUDAOCAJBIFQYDIOB4IBCEQT";

        #[test]
        fn test_hex_and_base32_decode_to_same_digest() {
            let from_hex = InfoHash::from_hash(HEX).unwrap();
            let from_base32 = InfoHash::from_hash(BASE32).unwrap();
            assert_eq!(from_hex.hash(), from_base32.hash());
            assert_eq!(from_hex, from_base32);
            let expected: Vec<u8> = (0u8..20).collect();
            assert_eq!(from_hex.hash().to_vec(), expected);
        }

        #[test]
        fn test_repeated_hex_and_base32() {
            let from_hex = InfoHash::from_hash(&"a".repeat(40)).unwrap();
            let from_base32 = InfoHash::from_hash(&"VK".repeat(16)).unwrap();
            assert_eq!(from_hex.hash(), &[0xaa; 20]);
            assert_eq!(from_hex.hash(), from_base32.hash());
        }

        #[test]
        fn test_uppercase_and_lowercase_accepted() {
            let upper = InfoHash::from_hash(&HEX.to_uppercase()).unwrap();
            let lower = InfoHash::from_hash(&BASE32.to_lowercase()).unwrap();
            assert_eq!(upper.hash(), lower.hash());
        }

        #[test]
        fn test_whitespace_trimmed() {
            let padded = format!("  {}\n", HEX);
            let hash = InfoHash::from_hash(&padded).unwrap();
            assert_eq!(hash.hash_hex(), HEX);
        }

        #[test]
        fn test_empty_hash_rejected() {
            assert_eq!(InfoHash::from_hash(""), Err(IdentityError::EmptyHash));
            assert_eq!(InfoHash::from_hash("   "), Err(IdentityError::EmptyHash));
        }

        #[test]
        fn test_invalid_hash_rejected() {
            assert!(matches!(InfoHash::from_hash("not-valid"), Err(IdentityError::UnsupportedHash(_))));
            // right length, wrong alphabet
            assert!(InfoHash::from_hash(&"g".repeat(40)).is_err());
            assert!(InfoHash::from_hash(&"1".repeat(32)).is_err());
            assert!(InfoHash::from_hash(&"a".repeat(39)).is_err());
        }

        #[test]
        fn test_from_info_matches_sha1() {
            let raw = b"d4:name4:teste";
            let hash = InfoHash::from_info(raw);
            let digest = Sha1::digest(raw);
            assert_eq!(hash.hash().as_slice(), digest.as_slice());
            assert_eq!(hash.hash_hex(), "1ade8a1a581f338e4fce4ce784da3f7d03f81f3a");
            assert_eq!(hash.size(), raw.len());
            assert_eq!(hash.info(), Some(&raw[..]));
        }

        #[test]
        fn test_from_info_empty_input() {
            let hash = InfoHash::from_info(&[]);
            assert_eq!(hash.hash_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
            assert_eq!(hash.size(), 0);
        }

        #[test]
        fn test_magnet_hash_has_no_info_until_set() {
            let mut hash = InfoHash::from_hash(HEX).unwrap();
            assert!(hash.info().is_none());
            assert_eq!(hash.size(), 0);
            hash.set_info(vec![1, 2, 3]);
            assert_eq!(hash.size(), 3);
            assert_eq!(hash.info(), Some(&[1u8, 2, 3][..]));
            assert_eq!(hash.hash_hex(), HEX);
        }

        #[test]
        fn test_hash_url_is_cached_percent_encoding() {
            let hash = InfoHash::from_hash(HEX).unwrap();
            assert!(hash.hash_url().starts_with("%00%01%02"));
            assert_eq!(hash.hash_url(), crate::common::common::url_encode(hash.hash()));
        }

        #[test]
        fn test_display_and_from_str() {
            let hash: InfoHash = HEX.parse().unwrap();
            assert_eq!(format!("{}", hash), HEX);
            assert!("zz".parse::<InfoHash>().is_err());
        }

        #[test]
        fn test_serialize_as_hex() {
            let hash = InfoHash::from_hash(HEX).unwrap();
            assert_eq!(serde_json::to_string(&hash).unwrap(), format!("\"{}\"", HEX));
        }
    }

    mod peer_identity_tests {
        use crate::identity::identity::PEER_ID_LENGTH;
        use crate::identity::structs::peer_identity::PeerIdentity;

        #[test]
        fn test_peer_id_length_is_fixed() {
            for version in ["", "1", "1.0", "0.3.1", "10.20.30.40"] {
                let identity = PeerIdentity::generate("TT", version);
                assert_eq!(identity.peer_id().0.len(), PEER_ID_LENGTH);
            }
        }

        #[test]
        fn test_short_version_is_zero_padded() {
            let identity = PeerIdentity::generate("TT", "1.2");
            assert_eq!(&identity.peer_id().0[..8], b"-TT1200-");
        }

        #[test]
        fn test_long_version_is_truncated() {
            let identity = PeerIdentity::generate("TT", "1.2.3.4.5");
            assert_eq!(&identity.peer_id().0[..8], b"-TT1234-");
        }

        #[test]
        fn test_exact_version_kept() {
            assert_eq!(PeerIdentity::build_prefix("TT", "0.3.1"), "-TT0310-");
            assert_eq!(PeerIdentity::build_prefix("AS", "1.1.0.1"), "-AS1101-");
        }

        #[test]
        fn test_random_suffix_differs() {
            let first = PeerIdentity::generate("TT", "1.0");
            let second = PeerIdentity::generate("TT", "1.0");
            assert_eq!(first.peer_id().0[..8], second.peer_id().0[..8]);
            assert_ne!(first.peer_id().0[8..], second.peer_id().0[8..]);
        }

        #[test]
        fn test_peer_id_url_matches_bytes() {
            let identity = PeerIdentity::generate("TT", "1.0");
            assert!(identity.peer_id_url().starts_with("-TT1000-"));
            assert_eq!(identity.peer_id_url(), crate::common::common::url_encode(&identity.peer_id().0));
        }

        #[test]
        fn test_overlong_tag_still_fixed_length() {
            let identity = PeerIdentity::generate("ABCDEFGHIJKLMNOPQRSTUVWXYZ", "1.0");
            assert_eq!(identity.peer_id().0.len(), PEER_ID_LENGTH);
            assert_eq!(&identity.peer_id().0[..14], b"-ABCDEFGH1000-");
        }

        #[test]
        fn test_long_tag_keeps_version_field() {
            let prefix = PeerIdentity::build_prefix("ABCDEFGHIJKLMN", "0.3.1");
            assert_eq!(prefix, "-ABCDEFGH0310-");
            let identity = PeerIdentity::generate("ABCDEFGHIJKLMN", "0.3.1");
            assert_eq!(&identity.peer_id().0[..prefix.len()], prefix.as_bytes());
        }
    }

    mod peer_id_tests {
        use crate::identity::structs::peer_id::PeerId;

        #[test]
        fn test_display_hex() {
            let peer_id = PeerId([0xab; 20]);
            assert_eq!(format!("{}", peer_id), "ab".repeat(20));
        }

        #[test]
        fn test_from_str() {
            let peer_id: PeerId = "cd".repeat(20).parse().unwrap();
            assert_eq!(peer_id, PeerId([0xcd; 20]));
            assert!("cd".parse::<PeerId>().is_err());
        }
    }

    mod decode_tests {
        use crate::identity::identity::{decode_base32_hash, decode_hex_hash};

        #[test]
        fn test_decode_rejects_wrong_lengths() {
            assert!(decode_hex_hash("00").is_none());
            assert!(decode_base32_hash("AAAA").is_none());
        }

        #[test]
        fn test_decode_base32_rejects_padding_characters() {
            let mut value = "A".repeat(31);
            value.push('=');
            assert!(decode_base32_hash(&value).is_none());
        }
    }
}
