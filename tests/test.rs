use futures_hedge::prelude::*;
use futures_hedge::{Deadline, RaceError, Runner, Task};
use futures_lite::future::block_on;
use std::future;
use std::time::Duration;

mod runner {
    use super::*;

    #[test]
    fn first_k_over_a_mixed_task_set() {
        block_on(async {
            let runner = Runner::new();
            runner.add(|| async { 1 });
            runner.add(|| async { 2 });
            runner.add(|| async { 3 });
            runner.add(|| future::pending::<i32>());

            let mut out = runner.first_k(3).await.unwrap();
            out.sort();
            assert_eq!(out, [1, 2, 3]);

            // The fourth task never finishes, so a first-4 race can only
            // end at the deadline.
            let res = runner
                .first_k_with_timeout(4, Duration::from_millis(50))
                .await
                .unwrap();
            assert_eq!(res, None);
        });
    }

    #[test]
    fn hedged_replicas_answer_fastest_first() {
        block_on(async {
            let runner = Runner::new();
            for (delay_ms, name) in [(240u64, "slow"), (10, "fast"), (120, "medium")] {
                runner.add(move || async move {
                    Deadline::after(Duration::from_millis(delay_ms)).await;
                    name
                });
            }

            assert_eq!(runner.first().await.unwrap(), "fast");

            let two = runner
                .first_k_with_timeout(2, Duration::from_secs(10))
                .await
                .unwrap()
                .unwrap();
            assert_eq!(two, ["fast", "medium"]);
        });
    }

    #[test]
    fn seeding_from_prebuilt_tasks() {
        block_on(async {
            let tasks = (0..4).map(|i| Task::new(move || async move { i * 10 }));
            let runner: Runner<_> = tasks.collect();
            assert_eq!(runner.len(), 4);

            let mut out = runner.first_k(4).await.unwrap();
            out.sort();
            assert_eq!(out, [0, 10, 20, 30]);
        });
    }

    #[test]
    fn validation_never_starts_work() {
        block_on(async {
            let runner = Runner::<u8>::new();
            assert_eq!(runner.first().await, Err(RaceError::NoTasks));
            assert_eq!(runner.first_k(0).await, Err(RaceError::InvalidK));
            assert_eq!(
                runner.first_k(1).await,
                Err(RaceError::InsufficientTasks {
                    needed: 1,
                    available: 0
                })
            );
        });
    }
}

mod first_k {
    use super::*;

    #[test]
    fn races_plain_future_collections() {
        block_on(async {
            let out = vec![future::ready("hello"), future::ready("world")]
                .first_k(1)
                .await;
            assert!(matches!(out[0], "hello" | "world"));
        });
    }

    #[test]
    fn timeout_composes_with_first_k() {
        block_on(async {
            let futures = vec![
                future::pending::<u8>(),
                future::pending::<u8>(),
                future::pending::<u8>(),
            ];
            let res = futures
                .first_k(2)
                .timeout(Deadline::after(Duration::from_millis(40)))
                .await;
            assert_eq!(res, None);
        });
    }
}
