use core::future::Future;
use core::pin::Pin;
use core::task::{ready, Context, Poll};
use std::time::Duration;

use async_io::Timer;
use pin_project::pin_project;

/// A one-shot timer future.
///
/// Resolves exactly once, when the configured duration has elapsed. The
/// timer starts when the `Deadline` is created, not when it is first
/// polled. Dropping an unfired `Deadline` releases the underlying timer.
///
/// # Examples
///
/// ```rust
/// use futures_hedge::Deadline;
/// use futures_lite::future::block_on;
/// use std::time::{Duration, Instant};
///
/// block_on(async {
///     let start = Instant::now();
///     Deadline::after(Duration::from_millis(50)).await;
///     assert!(start.elapsed() >= Duration::from_millis(50));
/// });
/// ```
#[derive(Debug)]
#[pin_project]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Deadline {
    #[pin]
    timer: Timer,
}

impl Deadline {
    /// Arm a deadline which fires once `dur` has elapsed.
    pub fn after(dur: Duration) -> Self {
        Self {
            timer: Timer::after(dur),
        }
    }
}

impl Future for Deadline {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();
        ready!(this.timer.poll(cx));
        Poll::Ready(())
    }
}
