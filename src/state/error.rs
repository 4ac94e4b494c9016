//! Errors raised by the shared state layer

use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to lock {0} state: lock poisoned")]
    LockPoisoned(&'static str),
}

/// Lock a widget's state, naming the widget in the error
pub(crate) fn lock<'a, T>(
    mutex: &'a Mutex<T>,
    name: &'static str,
) -> Result<MutexGuard<'a, T>, StateError> {
    mutex.lock().map_err(|_| StateError::LockPoisoned(name))
}
