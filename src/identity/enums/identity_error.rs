use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("info hash is empty")]
    EmptyHash,

    #[error("unsupported info hash: {0}")]
    UnsupportedHash(String),
}
