use crate::identity::structs::peer_id::PeerId;

/// The local client's peer id, generated once at start-up.
///
/// Layout is `-<tag><version>-<random>`, e.g. `-TT0310-` followed by twelve
/// random bytes. The percent-encoded form is computed once and reused for
/// every tracker request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerIdentity {
    pub(crate) peer_id: PeerId,
    pub(crate) peer_id_url: String,
}
