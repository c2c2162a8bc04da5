//! Hedged execution for [`Future`][core::future::Future]s: race a set of
//! tasks and keep the first `k` completions.
//!
//! Latency hedging is the practice of issuing the same request to several
//! redundant backends and taking whichever answers first, trading duplicated
//! work for tail latency. This crate provides the fan-out/fan-in building
//! blocks for that pattern: a [`FirstK`] operation which drives a set of
//! futures concurrently and resolves with the first `k` outputs in
//! completion order, a [`Deadline`] timer to bound the wait, and a
//! [`Runner`] which owns a reusable collection of tasks and exposes the
//! composed operations behind argument validation.
//!
//! # Operations
//!
//! | Name | Return signature | When does it return? |
//! | ---  | ---              | ---                  |
//! | [`FirstK::first_k`] | `Vec<T>` | As soon as `k` futures have completed |
//! | [`FutureExt::timeout`] | `Option<T>` | On completion, or `None` at the deadline |
//! | [`Runner::first`] | `Result<T, RaceError>` | As soon as any task completes |
//! | [`Runner::first_k`] | `Result<Vec<T>, RaceError>` | As soon as `k` tasks have completed |
//! | [`Runner::first_with_timeout`] | `Result<Option<T>, RaceError>` | Task completion or deadline |
//! | [`Runner::first_k_with_timeout`] | `Result<Option<Vec<T>>, RaceError>` | `k` completions or deadline |
//!
//! # Examples
//!
//! Query three simulated replicas and take the fastest answer:
//!
//! ```rust
//! use futures_hedge::Runner;
//! use futures_lite::future::block_on;
//!
//! block_on(async {
//!     let runner = Runner::new();
//!     runner.add(|| async { "replica-a" });
//!     runner.add(|| async { "replica-b" });
//!     runner.add(|| async { "replica-c" });
//!
//!     let fastest = runner.first().await.unwrap();
//!     assert!(fastest.starts_with("replica-"));
//! });
//! ```
//!
//! Or use the collection trait directly, without the [`Runner`]:
//!
//! ```rust
//! use futures_hedge::prelude::*;
//! use futures_lite::future::block_on;
//! use std::future;
//!
//! block_on(async {
//!     let out = vec![future::ready(1), future::ready(2), future::ready(3)]
//!         .first_k(2)
//!         .await;
//!     assert_eq!(out.len(), 2);
//! });
//! ```
//!
//! # Panic isolation
//!
//! A panicking task never takes down a race: each future is wrapped in
//! [`Isolate`], which absorbs the panic and simply contributes no
//! completion. A first-`k` race over a set in which fewer than `k` futures
//! ever complete therefore never resolves; combine it with a [`Deadline`]
//! when that is a possibility.

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod utils;

/// The hedged execution prelude.
pub mod prelude {
    pub use super::first_k::FirstK as _;
    pub use super::timeout::FutureExt as _;
}

pub mod first_k;
pub mod runner;
pub mod timeout;

pub use first_k::{FirstK, Isolate};
pub use runner::{RaceError, Runner, Task};
pub use timeout::{Deadline, FutureExt, Timeout};
