use std::time::{Duration, Instant};
use parking_lot::{Condvar, Mutex};
use crate::stats::structs::pace_interrupt::PaceInterrupt;

impl PaceInterrupt {
    pub fn new() -> PaceInterrupt {
        PaceInterrupt {
            interrupted: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Blocks for `duration` unless interrupted. Returns `true` if the wait was cut short
    /// (or the interrupt had already fired).
    pub fn wait(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        let mut interrupted = self.interrupted.lock();
        while !*interrupted {
            if self.condvar.wait_until(&mut interrupted, deadline).timed_out() {
                break;
            }
        }
        *interrupted
    }

    pub fn interrupt(&self) {
        let mut interrupted = self.interrupted.lock();
        *interrupted = true;
        self.condvar.notify_all();
    }

    pub fn is_interrupted(&self) -> bool {
        *self.interrupted.lock()
    }
}

impl Default for PaceInterrupt {
    fn default() -> Self {
        Self::new()
    }
}
