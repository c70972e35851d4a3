pub mod login;
pub mod navigator;
pub mod notifier;
pub mod pickup;

use std::sync::{Mutex, MutexGuard, PoisonError};

// recovers the guard from a poisoned lock
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
