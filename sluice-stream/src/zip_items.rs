// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Zip operator joining two streams pairwise.
//!
//! Each step reads one item from `self`, then one from `other`, and emits
//! `f(a, b)`. The output closes as soon as either input ends, so the result is
//! as long as the shorter input.
//!
//! `self` is read first: when it ends, `other` is not read again and its
//! remaining items stay where they are. When `other` ends first, the item
//! already read from `self` for that step is discarded.
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, ZipItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let zipped = generate([1, 2, 3]).zip_items(generate(["a", "b", "c", "d"]), |n, s| format!("{n}{s}"));
//! assert_eq!(zipped.collect_items().await, vec!["1a", "2b", "3c"]);
//! # }
//! ```

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `zip_items` operator for streams.
pub trait ZipItemsExt<T>: Stream<Item = T> + Sized {
    /// Combines items of `self` and `other` pairwise with `f`.
    fn zip_items<R, U, F>(self, other: R, f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Stream + Send + 'static,
        R::Item: Send + 'static,
        U: Send + 'static,
        F: FnMut(T, R::Item) -> U + Send + 'static,
    {
        self.zip_items_n(DEFAULT_CAPACITY, other, f)
    }

    /// Like [`zip_items`](Self::zip_items), with an output of the given capacity.
    fn zip_items_n<R, U, F>(self, capacity: usize, other: R, f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Stream + Send + 'static,
        R::Item: Send + 'static,
        U: Send + 'static,
        F: FnMut(T, R::Item) -> U + Send + 'static;
}

impl<S, T> ZipItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn zip_items_n<R, U, F>(self, capacity: usize, other: R, mut f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        R: Stream + Send + 'static,
        R::Item: Send + 'static,
        U: Send + 'static,
        F: FnMut(T, R::Item) -> U + Send + 'static,
    {
        let (tx, rx) = channel(capacity);

        spawn_producer("zip_items", async move {
            let mut left = Box::pin(self);
            let mut right = Box::pin(other);
            loop {
                let Some(a) = left.next().await else {
                    break;
                };
                let Some(b) = right.next().await else {
                    break;
                };
                if tx.send(f(a, b)).await.is_err() {
                    debug!("zip_items: output has no readers left, stopping");
                    break;
                }
            }
            tx.close();
        });

        rx
    }
}
