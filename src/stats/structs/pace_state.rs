use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;

#[derive(Debug)]
pub struct PaceState {
    /// Bytes recorded since the last pacing decision.
    pub(crate) buffered: AtomicU64,
    /// Milliseconds since node creation at the last decision.
    pub(crate) checkpoint: AtomicU64,
    pub(crate) lock: Mutex<()>,
}
