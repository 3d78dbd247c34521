//! Background task helper for offloading long codec calls.
//!
//! Codec transforms are CPU-bound and deterministic, so they need no
//! cancellation or progress machinery: submit the call with [`spawn`], keep
//! the interactive caller responsive, and [`Task::join`] when the result is
//! wanted. The codec itself stays thread-unaware.

use std::thread;

use crate::foundation::error::{SonopixError, SonopixResult};

/// Handle to a codec call running on a worker thread.
pub struct Task<T> {
    handle: thread::JoinHandle<T>,
}

impl<T> Task<T> {
    /// Whether the call has finished (successfully or by panic).
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Block until the call finishes and return its result.
    pub fn join(self) -> SonopixResult<T> {
        self.handle
            .join()
            .map_err(|_| SonopixError::Other(anyhow::anyhow!("codec worker thread panicked")))
    }
}

/// Run `f` on a worker thread and hand back a joinable [`Task`].
pub fn spawn<T, F>(f: F) -> Task<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    Task {
        handle: thread::spawn(f),
    }
}

#[cfg(test)]
#[path = "../tests/unit/task.rs"]
mod tests;
