//! Race a collection of futures and keep the first `k` completions.

use core::future::Future;

pub(crate) mod array;
pub(crate) mod guard;
/// Racing on vecs of futures.
pub mod vec;

pub use guard::Isolate;

/// Wait for the first `k` futures to complete.
///
/// Awaits multiple futures simultaneously, returning as soon as `k` of them
/// have completed. The outputs are collected in completion order: the
/// future that finishes first contributes the first element, and so on.
/// Which future fills a given slot when several are in flight is decided by
/// arrival and is not deterministic.
///
/// All remaining futures are dropped once the `k`th output has arrived.
pub trait FirstK {
    /// The output type of each raced future.
    type Output;

    /// The [`Future`] implementation returned by this method.
    type Future: Future<Output = Vec<Self::Output>>;

    /// Wait for the first `k` futures to complete.
    ///
    /// All futures must resolve to the same type. A future that panics is
    /// quietly withdrawn from the race and contributes no output; if that
    /// leaves fewer than `k` futures able to complete, the returned future
    /// never resolves. Bound the wait with
    /// [`timeout`][crate::timeout::FutureExt::timeout] when panics or
    /// never-completing futures are a possibility.
    ///
    /// # Panics
    ///
    /// Panics if `k` is zero or greater than the number of futures raced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # futures_lite::future::block_on(async {
    /// use futures_hedge::prelude::*;
    /// use std::future;
    ///
    /// let out = vec![future::ready(1), future::ready(2), future::ready(3)]
    ///     .first_k(2)
    ///     .await;
    /// assert_eq!(out.len(), 2);
    /// # });
    /// ```
    fn first_k(self, k: usize) -> Self::Future;
}
