// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Compact operator collapsing runs of equal items.
//!
//! The first item is always emitted. Every later item is emitted only if it is
//! not `equal` to the most recently *emitted* item. This is run-length
//! collapsing, not deduplication: `[1, 1, 2, 1]` becomes `[1, 2, 1]`.
//!
//! ## Example
//!
//! ```rust
//! use sluice_core::compare::equal;
//! use sluice_stream::{generate, CollectItemsExt, CompactItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let runs = generate([5, 5, 6, 6, 6, 5]).compact_items(equal);
//! assert_eq!(runs.collect_items().await, vec![5, 6, 5]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `compact_items` operator for streams.
pub trait CompactItemsExt<T>: Stream<Item = T> + Sized {
    /// Drops items `equal` to the previously emitted one.
    ///
    /// See the [module-level documentation](crate::compact_items) for details.
    fn compact_items<E>(self, equal: E) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Clone + Send + 'static,
        E: FnMut(&T, &T) -> bool + Send + 'static,
    {
        self.compact_items_n(DEFAULT_CAPACITY, equal)
    }

    /// Like [`compact_items`](Self::compact_items), with an output of the given capacity.
    fn compact_items_n<E>(self, capacity: usize, equal: E) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Clone + Send + 'static,
        E: FnMut(&T, &T) -> bool + Send + 'static;
}

impl<S, T> CompactItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn compact_items_n<E>(self, capacity: usize, mut equal: E) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Clone + Send + 'static,
        E: FnMut(&T, &T) -> bool + Send + 'static,
    {
        let mut last_emitted: Option<T> = None;

        spawn_stage("compact_items", self, capacity, move |item| {
            if let Some(previous) = &last_emitted {
                if equal(previous, &item) {
                    return Step::Skip;
                }
            }
            last_emitted = Some(item.clone());
            Step::Emit(item)
        })
    }
}
