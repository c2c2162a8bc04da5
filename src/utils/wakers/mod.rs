mod readiness;
mod waker;
mod waker_vec;

use readiness::Readiness;
use waker::IndexWaker;
pub(crate) use waker_vec::WakerVec;
