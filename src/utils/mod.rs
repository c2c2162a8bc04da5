//! Utilities to implement the futures of this crate.

mod pin;
mod wakers;

pub(crate) use pin::get_pin_mut_from_vec;
pub(crate) use wakers::WakerVec;
