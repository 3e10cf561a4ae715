//! Adapting a fallible future into a future of [`Optional`].

use std::any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures_util::FutureExt;

use crate::Optional;

impl<T> Optional<T> {
    /// Adapt a fallible asynchronous operation into one that always yields a
    /// container.
    ///
    /// `Ok(value)` resolves to a present container. `Err(_)` and a panic while
    /// polling `completion` both resolve to an absent one. The failure never
    /// reaches the caller; only its type is recorded in a `debug` tracing
    /// event. The adapted future settles exactly once, after `completion` does,
    /// and dropping it drops `completion`.
    ///
    /// A `tokio::task::JoinHandle<T>` is a valid source, so a spawned task that
    /// panics or is aborted also resolves to absent.
    pub fn of_completion<F, E>(completion: F) -> impl Future<Output = Self>
    where
        F: Future<Output = Result<T, E>>,
    {
        AssertUnwindSafe(completion)
            .catch_unwind()
            .map(|outcome| match outcome {
                Ok(Ok(value)) => Self::of(value),
                Ok(Err(_)) => {
                    tracing::debug!(
                        error_type = any::type_name::<E>(),
                        value_type = any::type_name::<T>(),
                        "Completion failed, resolving to empty Optional"
                    );
                    Self::empty()
                }
                Err(_) => {
                    tracing::debug!(
                        value_type = any::type_name::<T>(),
                        "Completion panicked, resolving to empty Optional"
                    );
                    Self::empty()
                }
            })
    }
}
