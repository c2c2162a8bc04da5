use core::future::IntoFuture;

use super::vec::FirstK;
use super::FirstK as FirstKTrait;

impl<Fut, const N: usize> FirstKTrait for [Fut; N]
where
    Fut: IntoFuture,
{
    type Output = Fut::Output;
    type Future = FirstK<Fut::IntoFuture>;

    fn first_k(self, k: usize) -> Self::Future {
        FirstK::new(self.into_iter().map(IntoFuture::into_future).collect(), k)
    }
}
