// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Partition operator that splits a stream into two based on a predicate.
//!
//! The [`partition_items`](PartitionItemsExt::partition_items) operator routes each
//! item to one of two output streams. Items satisfying the predicate go to the
//! first stream, the others go to the second.
//!
//! ## Characteristics
//!
//! - **Chain-breaking**: returns two streams
//! - **Spawns task**: a single routing task serves both outputs
//! - **Routing**: every item goes to exactly one output, in upstream order
//! - **Bounded**: both outputs have the requested capacity; nothing is buffered beyond it
//! - **Close**: both outputs close together, after the upstream ends
//!
//! ## Drain both sides concurrently
//!
//! The routing task sends to one output at a time and waits for room. If the
//! consumer of one side stalls, the router blocks on that side and the other
//! side starves too. Consume at least one side on its own task:
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, PartitionItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (evens, odds) = generate(1..=9).partition_items(|n| n % 2 == 0);
//!
//! let evens = tokio::spawn(evens.collect_items());
//! let odds = odds.collect_items().await;
//!
//! assert_eq!(evens.await.unwrap(), vec![2, 4, 6, 8]);
//! assert_eq!(odds, vec![1, 3, 5, 7, 9]);
//! # }
//! ```
//!
//! Dropping one side is safe: its items are discarded and the other side keeps
//! receiving.

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `partition_items` operator for streams.
pub trait PartitionItemsExt<T>: Stream<Item = T> + Sized {
    /// Splits the stream into `(matching, rest)` with zero-capacity outputs.
    ///
    /// See the [module-level documentation](crate::partition_items) for the
    /// concurrent-draining contract.
    fn partition_items<P>(self, predicate: P) -> (Receiver<T>, Receiver<T>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.partition_items_n(DEFAULT_CAPACITY, predicate)
    }

    /// Like [`partition_items`](Self::partition_items), with outputs of the given capacity.
    fn partition_items_n<P>(self, capacity: usize, predicate: P) -> (Receiver<T>, Receiver<T>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<S, T> PartitionItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn partition_items_n<P>(self, capacity: usize, mut predicate: P) -> (Receiver<T>, Receiver<T>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let (matching_tx, matching_rx) = channel(capacity);
        let (rest_tx, rest_rx) = channel(capacity);

        spawn_producer("partition_items", async move {
            let mut source = Box::pin(self);
            let mut warned = false;
            while let Some(item) = source.next().await {
                let target = if predicate(&item) {
                    &matching_tx
                } else {
                    &rest_tx
                };
                if target.send(item).await.is_err() {
                    if matching_tx.is_disconnected() && rest_tx.is_disconnected() {
                        debug!("partition_items: both outputs have no readers left, stopping");
                        break;
                    }
                    if !warned {
                        warn!("partition_items: one output has no readers left, discarding its items");
                        warned = true;
                    }
                }
            }
            matching_tx.close();
            rest_tx.close();
        });

        (matching_rx, rest_rx)
    }
}
