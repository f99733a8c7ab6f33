use std::sync::atomic::{AtomicU64, Ordering};
use parking_lot::Mutex;
use crate::stats::structs::pace_state::PaceState;

impl PaceState {
    pub fn new() -> PaceState {
        PaceState {
            buffered: AtomicU64::new(0),
            checkpoint: AtomicU64::new(0),
            lock: Mutex::new(()),
        }
    }

    pub fn buffered(&self) -> u64 {
        self.buffered.load(Ordering::Acquire)
    }

    pub fn checkpoint(&self) -> u64 {
        self.checkpoint.load(Ordering::Acquire)
    }
}

impl Default for PaceState {
    fn default() -> Self {
        Self::new()
    }
}
