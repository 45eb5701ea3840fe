// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Producers that perturb scheduling between sends.
//!
//! A jittered producer yields back to the runtime a random number of times
//! (up to [`MAX_YIELDS`]) before every send. Several of them feeding one
//! fan-in stage finish in an unpredictable order, which exercises the paths
//! where inputs end concurrently.

use sluice_core::{channel, spawn_producer, Receiver};

/// Upper bound on scheduler yields before a single send.
pub const MAX_YIELDS: usize = 8;

/// Streams `values` through a channel of the given capacity, with random yields between sends.
pub fn jittered<I>(capacity: usize, values: I) -> Receiver<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    jittered_with_seed(capacity, values, fastrand::u64(..))
}

/// Like [`jittered`], with a fixed seed so a failing interleaving can be replayed.
pub fn jittered_with_seed<I>(capacity: usize, values: I, seed: u64) -> Receiver<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = channel(capacity);
    let values = values.into_iter();

    spawn_producer("jittered", async move {
        let mut rng = fastrand::Rng::with_seed(seed);
        for value in values {
            for _ in 0..rng.usize(0..=MAX_YIELDS) {
                tokio::task::yield_now().await;
            }
            if tx.send(value).await.is_err() {
                break;
            }
        }
        tx.close();
    });

    rx
}
