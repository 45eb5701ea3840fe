// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop operator discarding the first `n` items.
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, DropItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let tail = generate(1..=9).drop_items(3);
//! assert_eq!(tail.collect_items().await, vec![4, 5, 6, 7, 8, 9]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `drop_items` operator for streams.
pub trait DropItemsExt<T>: Stream<Item = T> + Sized {
    /// Discards the first `n` items and forwards the rest.
    fn drop_items(self, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        self.drop_items_n(DEFAULT_CAPACITY, n)
    }

    /// Like [`drop_items`](Self::drop_items), with an output of the given capacity.
    fn drop_items_n(self, capacity: usize, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> DropItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn drop_items_n(self, capacity: usize, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        let mut seen = 0usize;

        spawn_stage("drop_items", self, capacity, move |item| {
            if seen < n {
                seen += 1;
                Step::Skip
            } else {
                Step::Emit(item)
            }
        })
    }
}
