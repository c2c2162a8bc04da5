use core::fmt;
use core::future::{Future, IntoFuture};
use core::mem;
use core::pin::Pin;
use core::task::{Context, Poll};

use fixedbitset::FixedBitSet;
use pin_project::pin_project;

use super::guard::Isolate;
use super::FirstK as FirstKTrait;
use crate::utils::{self, WakerVec};

/// A future which waits for the first `k` futures to complete.
///
/// This `struct` is created by the [`first_k`] method on the [`FirstK`]
/// trait. See its documentation for more.
///
/// [`first_k`]: crate::first_k::FirstK::first_k
/// [`FirstK`]: crate::first_k::FirstK
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct FirstK<Fut>
where
    Fut: Future,
{
    k: usize,
    outputs: Vec<Fut::Output>,
    wakers: WakerVec,
    completed: FixedBitSet,
    awake_list_buffer: Vec<usize>,
    done: bool,
    #[pin]
    futures: Vec<Isolate<Fut>>,
}

impl<Fut> FirstK<Fut>
where
    Fut: Future,
{
    pub(crate) fn new(futures: Vec<Fut>, k: usize) -> Self {
        let len = futures.len();
        assert!(k > 0, "`k` must be greater than zero");
        assert!(k <= len, "cannot take the first {k} of {len} futures");
        Self {
            k,
            outputs: Vec::with_capacity(k),
            wakers: WakerVec::new(len),
            completed: FixedBitSet::with_capacity(len),
            awake_list_buffer: Vec::new(),
            done: false,
            futures: futures.into_iter().map(Isolate::new).collect(),
        }
    }
}

impl<Fut> fmt::Debug for FirstK<Fut>
where
    Fut: Future + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.futures.iter()).finish()
    }
}

impl<Fut> Future for FirstK<Fut>
where
    Fut: Future,
{
    type Output = Vec<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(!*this.done, "future polled after completing");

        {
            let mut readiness = this.wakers.readiness().lock().unwrap();
            readiness.set_waker(cx.waker());
            readiness.take_ready(this.awake_list_buffer);
        }

        for idx in this.awake_list_buffer.drain(..) {
            if this.completed.contains(idx) {
                // Woken future is already complete, don't poll it again.
                continue;
            }
            let fut = utils::get_pin_mut_from_vec(this.futures.as_mut(), idx).unwrap();
            let mut cx = Context::from_waker(this.wakers.get(idx).unwrap());
            if let Poll::Ready(output) = fut.poll(&mut cx) {
                this.completed.set(idx, true);
                // A `None` output means the future panicked; it is withdrawn
                // from the race and contributes nothing.
                if let Some(value) = output {
                    this.outputs.push(value);
                    if this.outputs.len() == *this.k {
                        *this.done = true;
                        return Poll::Ready(mem::take(this.outputs));
                    }
                }
            }
        }

        // If every future has completed but fewer than `k` produced an
        // output, no wakeup is ever coming: the race stays pending.
        Poll::Pending
    }
}

impl<Fut> FirstKTrait for Vec<Fut>
where
    Fut: IntoFuture,
{
    type Output = Fut::Output;
    type Future = FirstK<Fut::IntoFuture>;

    fn first_k(self, k: usize) -> Self::Future {
        FirstK::new(self.into_iter().map(IntoFuture::into_future).collect(), k)
    }
}
