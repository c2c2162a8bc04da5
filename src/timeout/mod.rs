//! Bound the time spent waiting on a future.
//!
//! [`Deadline`] is a one-shot timer future; [`Timeout`] races any future
//! against any deadline, yielding `None` if the deadline fires first. The
//! deadline does not have to be a timer: any future works, which makes it
//! possible to cut a race short on an external signal.

use core::future::{Future, IntoFuture};
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project::pin_project;

mod deadline;

pub use deadline::Deadline;

/// An extension trait for the `Future` trait.
pub trait FutureExt: Future {
    /// Race this future against a deadline.
    ///
    /// Returns `Some(output)` if the future completes before the deadline,
    /// and `None` if the deadline fires first. A future that is ready in
    /// the same poll as an expired deadline wins the race.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use futures_hedge::prelude::*;
    /// use futures_hedge::Deadline;
    /// use futures_lite::future::block_on;
    /// use std::future;
    /// use std::time::Duration;
    ///
    /// block_on(async {
    ///     let res = future::pending::<u8>()
    ///         .timeout(Deadline::after(Duration::from_millis(10)))
    ///         .await;
    ///     assert_eq!(res, None);
    /// });
    /// ```
    fn timeout<D>(self, deadline: D) -> Timeout<Self, D::IntoFuture>
    where
        Self: Sized,
        D: IntoFuture,
    {
        Timeout::new(self, deadline.into_future())
    }
}

impl<F> FutureExt for F where F: Future {}

/// Races a future against a deadline.
///
/// This `struct` is created by the [`timeout`] method on [`FutureExt`]. See
/// its documentation for more.
///
/// [`timeout`]: crate::timeout::FutureExt::timeout
/// [`FutureExt`]: crate::timeout::FutureExt
#[derive(Debug)]
#[pin_project]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Timeout<F, D> {
    #[pin]
    future: F,
    #[pin]
    deadline: D,
    done: bool,
}

impl<F, D> Timeout<F, D> {
    pub(crate) fn new(future: F, deadline: D) -> Self {
        Self {
            future,
            deadline,
            done: false,
        }
    }
}

impl<F: Future, D: Future> Future for Timeout<F, D> {
    type Output = Option<F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        assert!(!*this.done, "future polled after completing");

        // The wrapped future goes first so that a result which is already
        // available beats a deadline expiring in the same poll.
        if let Poll::Ready(output) = this.future.poll(cx) {
            *this.done = true;
            return Poll::Ready(Some(output));
        }

        if this.deadline.poll(cx).is_ready() {
            *this.done = true;
            return Poll::Ready(None);
        }

        Poll::Pending
    }
}
