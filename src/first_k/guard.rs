use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::panic::{catch_unwind, AssertUnwindSafe};

use pin_project::pin_project;

/// Isolates panics from the wrapped future.
///
/// Polls the inner future inside [`catch_unwind`]; on a panic the payload is
/// dropped and the future resolves to `None`. Used by
/// [`first_k`][crate::first_k::FirstK::first_k] so that one misbehaving task
/// cannot take down a whole race.
///
/// # Examples
///
/// ```rust
/// # futures_lite::future::block_on(async {
/// use futures_hedge::Isolate;
///
/// let ok = Isolate::new(async { 1 }).await;
/// assert_eq!(ok, Some(1));
///
/// let bad = Isolate::new(async { panic!("boom") }).await;
/// assert_eq!(bad, None::<()>);
/// # });
/// ```
#[derive(Debug)]
#[pin_project]
#[must_use = "futures do nothing unless polled or .awaited"]
pub struct Isolate<F> {
    #[pin]
    inner: F,
}

impl<F> Isolate<F> {
    /// Wrap a future so that a panic inside it resolves to `None`.
    pub fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<F: Future> Future for Isolate<F> {
    type Output = Option<F::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        match catch_unwind(AssertUnwindSafe(|| this.inner.as_mut().poll(cx))) {
            Ok(Poll::Ready(value)) => Poll::Ready(Some(value)),
            Ok(Poll::Pending) => Poll::Pending,
            Err(_panic) => Poll::Ready(None),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::future;

    #[test]
    fn passes_output_through() {
        futures_lite::future::block_on(async {
            let res = Isolate::new(future::ready("hello")).await;
            assert_eq!(res, Some("hello"));
        });
    }

    #[test]
    fn absorbs_panics() {
        futures_lite::future::block_on(async {
            let res: Option<u8> = Isolate::new(async { panic!("kaboom") }).await;
            assert_eq!(res, None);
        });
    }
}
