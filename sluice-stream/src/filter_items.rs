// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Filter operator keeping the items that satisfy a predicate.
//!
//! Relative order of the kept items is preserved. The output may be empty.
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, FilterItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let evens = generate(1..=8).filter_items(|n| n % 2 == 0);
//! assert_eq!(evens.collect_items().await, vec![2, 4, 6, 8]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `filter_items` operator for streams.
pub trait FilterItemsExt<T>: Stream<Item = T> + Sized {
    /// Forwards only items for which `predicate` returns `true`.
    ///
    /// See the [module-level documentation](crate::filter_items) for details.
    fn filter_items<P>(self, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.filter_items_n(DEFAULT_CAPACITY, predicate)
    }

    /// Like [`filter_items`](Self::filter_items), with an output of the given capacity.
    fn filter_items_n<P>(self, capacity: usize, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<S, T> FilterItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn filter_items_n<P>(self, capacity: usize, mut predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        spawn_stage("filter_items", self, capacity, move |item| {
            if predicate(&item) {
                Step::Emit(item)
            } else {
                Step::Skip
            }
        })
    }
}
