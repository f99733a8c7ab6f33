use parking_lot::{Condvar, Mutex};

#[derive(Debug)]
pub struct PaceInterrupt {
    pub(crate) interrupted: Mutex<bool>,
    pub(crate) condvar: Condvar,
}
