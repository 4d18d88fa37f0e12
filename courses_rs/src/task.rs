//! Cancellable panel loads.
//!
//! A view spawns the returned future and fires the handle when it goes away;
//! once aborted, whatever the load produces is dropped instead of applied.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};

/// Wrap `load` so its output reaches `apply` only if `handle.abort()` was not
/// called first.
pub fn cancellable<F, A>(load: F, apply: A) -> (impl Future<Output = ()>, AbortHandle)
where
    F: Future,
    A: FnOnce(F::Output),
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = async move {
        if let Ok(output) = Abortable::new(load, registration).await {
            apply(output);
        }
    };
    (task, handle)
}
