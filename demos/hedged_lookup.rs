//! Hedged replica lookup.
//!
//! Issues the same (simulated) lookup against three replicas with very
//! different latencies, then:
//!
//! 1. takes the single fastest answer,
//! 2. takes the two fastest answers for a quorum-style read,
//! 3. shows a deadline cutting off a read that wants more answers than
//!    will ever arrive.

use futures_hedge::{Deadline, Runner};
use futures_lite::future::block_on;
use std::future;
use std::time::Duration;

fn main() {
    block_on(async {
        let runner = Runner::new();
        for (latency_ms, name) in [(250u64, "replica-c"), (15, "replica-a"), (90, "replica-b")] {
            runner.add(move || async move {
                Deadline::after(Duration::from_millis(latency_ms)).await;
                name
            });
        }
        // A replica that is down never answers at all.
        runner.add(|| future::pending());

        let fastest = runner.first().await.unwrap();
        println!("fastest answer: {fastest}");

        let quorum = runner.first_k(2).await.unwrap();
        println!("quorum answers: {quorum:?}");

        let all_four = runner
            .first_k_with_timeout(4, Duration::from_millis(500))
            .await
            .unwrap();
        match all_four {
            Some(answers) => println!("all four answered: {answers:?}"),
            None => println!("gave up waiting for the downed replica"),
        }
    })
}
