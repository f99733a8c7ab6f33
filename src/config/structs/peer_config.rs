use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PeerConfig {
    /// Short ASCII tag placed after the leading `-` of the peer id.
    pub client_tag: String,
    /// Defaults to the crate version when absent.
    pub client_version: Option<String>
}
