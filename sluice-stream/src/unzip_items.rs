// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Unzip operator splitting every item into a pair of outputs.
//!
//! `f` turns each item into `(a, b)`; `a` is sent to the first output, then `b`
//! to the second. Like [`partition_items`](crate::PartitionItemsExt::partition_items),
//! a single task serves both outputs, so both must be drained concurrently.
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, UnzipItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (names, sizes) = generate(["ab", "cde"]).unzip_items(|s| (s.to_uppercase(), s.len()));
//!
//! let names = tokio::spawn(names.collect_items());
//! assert_eq!(sizes.collect_items().await, vec![2, 3]);
//! assert_eq!(names.await.unwrap(), vec!["AB", "CDE"]);
//! # }
//! ```

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `unzip_items` operator for streams.
pub trait UnzipItemsExt<T>: Stream<Item = T> + Sized {
    /// Splits every item with `f` into two zero-capacity outputs.
    fn unzip_items<A, B, F>(self, f: F) -> (Receiver<A>, Receiver<B>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(T) -> (A, B) + Send + 'static,
    {
        self.unzip_items_n(DEFAULT_CAPACITY, f)
    }

    /// Like [`unzip_items`](Self::unzip_items), with outputs of the given capacity.
    fn unzip_items_n<A, B, F>(self, capacity: usize, f: F) -> (Receiver<A>, Receiver<B>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(T) -> (A, B) + Send + 'static;
}

impl<S, T> UnzipItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn unzip_items_n<A, B, F>(self, capacity: usize, mut f: F) -> (Receiver<A>, Receiver<B>)
    where
        Self: Send + 'static,
        T: Send + 'static,
        A: Send + 'static,
        B: Send + 'static,
        F: FnMut(T) -> (A, B) + Send + 'static,
    {
        let (first_tx, first_rx) = channel(capacity);
        let (second_tx, second_rx) = channel(capacity);

        spawn_producer("unzip_items", async move {
            let mut source = Box::pin(self);
            let mut warned = false;
            while let Some(item) = source.next().await {
                let (a, b) = f(item);
                let first_gone = first_tx.send(a).await.is_err();
                let second_gone = second_tx.send(b).await.is_err();
                if first_gone && second_gone {
                    debug!("unzip_items: both outputs have no readers left, stopping");
                    break;
                }
                if (first_gone || second_gone) && !warned {
                    warn!("unzip_items: one output has no readers left, discarding its items");
                    warned = true;
                }
            }
            first_tx.close();
            second_tx.close();
        });

        (first_rx, second_rx)
    }
}
