use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("empty datagram")]
    Empty,
    #[error("datagram of {length} bytes is too short, {required} required")]
    TooShort { length: usize, required: usize },
}
