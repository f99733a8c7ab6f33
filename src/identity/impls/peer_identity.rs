use log::debug;
use rand::RngExt;
use crate::common::common::url_encode;
use crate::config::structs::configuration::Configuration;
use crate::identity::identity::{CLIENT_TAG_LENGTH, PEER_ID_LENGTH, VERSION_LENGTH};
use crate::identity::structs::peer_id::PeerId;
use crate::identity::structs::peer_identity::PeerIdentity;

impl PeerIdentity {
    #[tracing::instrument(level = "debug")]
    pub fn generate(client_tag: &str, version: &str) -> PeerIdentity {
        let prefix = Self::build_prefix(client_tag, version);
        let prefix_bytes = prefix.as_bytes();
        let prefix_length = prefix_bytes.len().min(PEER_ID_LENGTH);

        let mut peer_id = [0u8; PEER_ID_LENGTH];
        peer_id[..prefix_length].copy_from_slice(&prefix_bytes[..prefix_length]);
        let mut rng = rand::rng();
        for byte in peer_id[prefix_length..].iter_mut() {
            *byte = rng.random();
        }

        let peer_id_url = url_encode(&peer_id);
        debug!("[IDENTITY] PeerIdUrl: {}", peer_id_url);
        PeerIdentity {
            peer_id: PeerId(peer_id),
            peer_id_url,
        }
    }

    pub fn from_config(config: &Configuration) -> PeerIdentity {
        Self::generate(&config.peer.client_tag, &config.client_version())
    }

    /// `-<tag><vvvv>-`, the tag cut to eight characters and the version stripped of dots
    /// and cut or zero-padded to four characters.
    pub fn build_prefix(client_tag: &str, version: &str) -> String {
        let client_tag: String = client_tag.chars().take(CLIENT_TAG_LENGTH).collect();
        let version: String = version.chars().filter(|c| *c != '.').take(VERSION_LENGTH).collect();
        let padding = VERSION_LENGTH - version.chars().count();
        format!("-{}{}{}-", client_tag, version, "0".repeat(padding))
    }

    pub fn peer_id(&self) -> &PeerId {
        &self.peer_id
    }

    pub fn peer_id_url(&self) -> &str {
        &self.peer_id_url
    }
}
