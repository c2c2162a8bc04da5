//! A reusable collection of tasks and the racing operations over it.
//!
//! A [`Task`] is a zero-argument unit of work: a factory closure producing a
//! fresh future each time the task is raced. A [`Runner`] owns an ordered
//! collection of tasks behind a mutex and exposes the four racing
//! operations, validating their arguments before any work starts.

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use crate::first_k::vec::FirstK;
use crate::prelude::*;
use crate::timeout::Deadline;

mod error;

pub use error::RaceError;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;

/// A zero-argument unit of work producing a `T`.
///
/// A task is repeatable: every race it participates in instantiates a fresh
/// future from the underlying closure. Construct one with [`Task::new`], or
/// let [`Runner::add`] do the boxing.
pub struct Task<T>(Box<dyn Fn() -> BoxFuture<T> + Send + Sync + 'static>);

impl<T> Task<T> {
    /// Create a task from an async factory closure.
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        Self(Box::new(move || {
            let fut: BoxFuture<T> = Box::pin(f());
            fut
        }))
    }

    /// Instantiate a fresh future for one race.
    fn start(&self) -> BoxFuture<T> {
        (self.0)()
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

/// A mutable, ordered collection of tasks with racing operations.
///
/// Tasks are kept in insertion order, though the order carries no racing
/// semantics. All operations take `&self`: the collection lives behind a
/// mutex, so a runner can be shared freely between threads.
///
/// Each racing call validates its arguments, snapshots the task collection
/// under the lock, instantiates one future per task, and then races the
/// snapshot with the lock released. Consequently multiple races on the same
/// runner may be in flight at once, and tasks appended while a race is
/// running join later races only.
///
/// # Examples
///
/// ```rust
/// use futures_hedge::Runner;
/// use futures_lite::future::block_on;
///
/// block_on(async {
///     let runner = Runner::new();
///     runner.add(|| async { 2 + 2 });
///     assert_eq!(runner.first().await.unwrap(), 4);
/// });
/// ```
pub struct Runner<T> {
    tasks: Mutex<Vec<Task<T>>>,
}

impl<T> Runner<T> {
    /// Create an empty runner.
    pub fn new() -> Self {
        Self {
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Create a runner seeded with the given tasks.
    pub fn from_tasks(tasks: impl IntoIterator<Item = Task<T>>) -> Self {
        Self {
            tasks: Mutex::new(tasks.into_iter().collect()),
        }
    }

    /// Append one task to the collection.
    pub fn add<F, Fut>(&self, task: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = T> + Send + 'static,
    {
        self.tasks.lock().unwrap().push(Task::new(task));
    }

    /// Append every task from `tasks` to the collection.
    pub fn extend(&self, tasks: impl IntoIterator<Item = Task<T>>) {
        self.tasks.lock().unwrap().extend(tasks);
    }

    /// The number of tasks currently held.
    pub fn len(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    /// Whether the runner currently holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Race all tasks and return the first value to complete.
    ///
    /// # Errors
    ///
    /// Fails with [`RaceError::NoTasks`] if the collection is empty.
    ///
    /// If no task ever completes (for example because every task panicked),
    /// the returned future never resolves; use
    /// [`first_with_timeout`][Self::first_with_timeout] to bound the wait.
    pub async fn first(&self) -> Result<T, RaceError> {
        let race = {
            let tasks = self.tasks.lock().unwrap();
            if tasks.is_empty() {
                return Err(RaceError::NoTasks);
            }
            Self::race(&tasks, 1)
        };
        let mut outputs = race.await;
        Ok(outputs.pop().expect("a first-1 race yields exactly one output"))
    }

    /// Race all tasks and return the first `k` values to complete, in
    /// completion order.
    ///
    /// # Errors
    ///
    /// Fails with [`RaceError::InvalidK`] if `k` is zero, and with
    /// [`RaceError::InsufficientTasks`] if fewer than `k` tasks are held.
    ///
    /// If fewer than `k` tasks ever complete, the returned future never
    /// resolves; use [`first_k_with_timeout`][Self::first_k_with_timeout]
    /// to bound the wait.
    pub async fn first_k(&self, k: usize) -> Result<Vec<T>, RaceError> {
        let race = self.armed(k)?;
        Ok(race.await)
    }

    /// Race all tasks against a deadline and return the first value to
    /// complete, or `None` if the deadline fires first.
    ///
    /// # Errors
    ///
    /// Fails with [`RaceError::NoTasks`] if the collection is empty,
    /// checked before the deadline is armed.
    pub async fn first_with_timeout(&self, dur: Duration) -> Result<Option<T>, RaceError> {
        let race = {
            let tasks = self.tasks.lock().unwrap();
            if tasks.is_empty() {
                return Err(RaceError::NoTasks);
            }
            Self::race(&tasks, 1)
        };
        match race.timeout(Deadline::after(dur)).await {
            Some(mut outputs) => {
                Ok(Some(outputs.pop().expect(
                    "a first-1 race yields exactly one output",
                )))
            }
            None => Ok(None),
        }
    }

    /// Race all tasks against a deadline and return the first `k` values to
    /// complete in completion order, or `None` if the deadline fires before
    /// the `k`th completion arrives.
    ///
    /// # Errors
    ///
    /// Fails with [`RaceError::InvalidK`] if `k` is zero, and with
    /// [`RaceError::InsufficientTasks`] if fewer than `k` tasks are held;
    /// both checked before the deadline is armed.
    pub async fn first_k_with_timeout(
        &self,
        k: usize,
        dur: Duration,
    ) -> Result<Option<Vec<T>>, RaceError> {
        let race = self.armed(k)?;
        Ok(race.timeout(Deadline::after(dur)).await)
    }

    /// Validate `k` against the current task collection and arm a race over
    /// a snapshot of it.
    fn armed(&self, k: usize) -> Result<FirstK<BoxFuture<T>>, RaceError> {
        if k == 0 {
            return Err(RaceError::InvalidK);
        }
        let tasks = self.tasks.lock().unwrap();
        if tasks.len() < k {
            return Err(RaceError::InsufficientTasks {
                needed: k,
                available: tasks.len(),
            });
        }
        Ok(Self::race(&tasks, k))
    }

    fn race(tasks: &[Task<T>], k: usize) -> FirstK<BoxFuture<T>> {
        tasks.iter().map(Task::start).collect::<Vec<_>>().first_k(k)
    }
}

impl<T> Default for Runner<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Runner<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Runner")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T> FromIterator<Task<T>> for Runner<T> {
    fn from_iter<I: IntoIterator<Item = Task<T>>>(iter: I) -> Self {
        Self::from_tasks(iter)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use futures_lite::future::block_on;
    use std::future;

    #[test]
    fn single_task_yields_its_value() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { 1 });
            assert_eq!(runner.first().await, Ok(1));
        });
    }

    #[test]
    fn first_fails_on_an_empty_runner() {
        block_on(async {
            let runner = Runner::<u8>::new();
            assert_eq!(runner.first().await, Err(RaceError::NoTasks));

            let runner = Runner::<u8>::from_tasks([]);
            assert_eq!(runner.first().await, Err(RaceError::NoTasks));
        });
    }

    #[test]
    fn zero_k_is_invalid_regardless_of_task_count() {
        block_on(async {
            let runner = Runner::<u8>::new();
            assert_eq!(runner.first_k(0).await, Err(RaceError::InvalidK));

            runner.add(|| async { 1 });
            assert_eq!(runner.first_k(0).await, Err(RaceError::InvalidK));
        });
    }

    #[test]
    fn k_beyond_the_task_count_is_insufficient() {
        block_on(async {
            let runner = Runner::<bool>::new();
            assert_eq!(
                runner.first_k(3).await,
                Err(RaceError::InsufficientTasks {
                    needed: 3,
                    available: 0
                })
            );

            runner.add(|| async { true });
            assert_eq!(
                runner.first_k(3).await,
                Err(RaceError::InsufficientTasks {
                    needed: 3,
                    available: 1
                })
            );
        });
    }

    #[test]
    fn first_k_returns_exactly_k_values() {
        block_on(async {
            let k = 3;
            let runner = Runner::new();
            for i in 0..k + 2 {
                runner.add(move || async move { i });
            }
            let out = runner.first_k(k).await.unwrap();
            assert_eq!(out.len(), k);
        });
    }

    #[test]
    fn timeout_reports_no_completion() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| future::pending::<u8>());
            let res = runner
                .first_with_timeout(Duration::from_millis(20))
                .await
                .unwrap();
            assert_eq!(res, None);
        });
    }

    #[test]
    fn timeout_passes_a_prompt_value_through() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { "quick" });
            let res = runner
                .first_with_timeout(Duration::from_secs(10))
                .await
                .unwrap();
            assert_eq!(res, Some("quick"));
        });
    }

    #[test]
    fn first_with_timeout_still_validates_first() {
        block_on(async {
            let runner = Runner::<u8>::new();
            assert_eq!(
                runner.first_with_timeout(Duration::from_secs(1)).await,
                Err(RaceError::NoTasks)
            );
            assert_eq!(
                runner.first_k_with_timeout(0, Duration::from_secs(1)).await,
                Err(RaceError::InvalidK)
            );
            assert_eq!(
                runner.first_k_with_timeout(2, Duration::from_secs(1)).await,
                Err(RaceError::InsufficientTasks {
                    needed: 2,
                    available: 0
                })
            );
        });
    }

    #[test]
    fn partial_completion_still_times_out() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { 1 });
            runner.add(|| async { 2 });
            runner.add(|| future::pending::<i32>());
            let res = runner
                .first_k_with_timeout(3, Duration::from_millis(30))
                .await
                .unwrap();
            assert_eq!(res, None);
        });
    }

    #[test]
    fn panicking_tasks_never_surface() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { panic!("this task is broken") });
            runner.add(|| async { 42 });
            assert_eq!(runner.first().await, Ok(42));
        });
    }

    #[test]
    fn concurrent_adds_are_never_lost() {
        let runner = Runner::new();
        runner.add(|| async { 0usize });

        std::thread::scope(|s| {
            for i in 0..16 {
                let runner = &runner;
                s.spawn(move || runner.add(move || async move { i }));
            }
        });

        assert_eq!(runner.len(), 17);
    }

    #[test]
    fn tasks_are_repeatable_across_races() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { 7 });
            assert_eq!(runner.first().await, Ok(7));
            assert_eq!(runner.first().await, Ok(7));
            assert_eq!(runner.first_k(1).await, Ok(vec![7]));
        });
    }
}
