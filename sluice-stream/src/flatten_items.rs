// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Flatten operator emitting the elements of batched items.
//!
//! Every upstream item is a collection; its elements are sent downstream one
//! by one, batch after batch, in order. Empty batches produce nothing.
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, FlattenItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let batches = generate([vec![1, 2], vec![], vec![3]]);
//! assert_eq!(batches.flatten_items().collect_items().await, vec![1, 2, 3]);
//! # }
//! ```

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `flatten_items` operator for streams of batches.
pub trait FlattenItemsExt<B>: Stream<Item = B> + Sized
where
    B: IntoIterator,
{
    /// Sends every element of every batch, in order.
    fn flatten_items(self) -> Receiver<B::Item>
    where
        Self: Send + 'static,
        B: Send + 'static,
        B::IntoIter: Send,
        B::Item: Send + 'static,
    {
        self.flatten_items_n(DEFAULT_CAPACITY)
    }

    /// Like [`flatten_items`](Self::flatten_items), with an output of the given capacity.
    fn flatten_items_n(self, capacity: usize) -> Receiver<B::Item>
    where
        Self: Send + 'static,
        B: Send + 'static,
        B::IntoIter: Send,
        B::Item: Send + 'static;
}

impl<S, B> FlattenItemsExt<B> for S
where
    S: Stream<Item = B>,
    B: IntoIterator,
{
    fn flatten_items_n(self, capacity: usize) -> Receiver<B::Item>
    where
        Self: Send + 'static,
        B: Send + 'static,
        B::IntoIter: Send,
        B::Item: Send + 'static,
    {
        let (tx, rx) = channel(capacity);

        spawn_producer("flatten_items", async move {
            let mut source = Box::pin(self);
            'batches: while let Some(batch) = source.next().await {
                for value in batch {
                    if tx.send(value).await.is_err() {
                        debug!("flatten_items: output has no readers left, stopping");
                        break 'batches;
                    }
                }
            }
            tx.close();
        });

        rx
    }
}
