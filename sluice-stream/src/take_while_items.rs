// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take-while operator forwarding items until a predicate first fails.
//!
//! The first failing item is read from the upstream and discarded, then the
//! output closes. The upstream itself is neither closed nor drained: when the
//! upstream is a shared [`Receiver`](sluice_core::Receiver), another handle can
//! keep reading whatever comes after the failing item.
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, TakeWhileItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let small = generate(1..=9).take_while_items(|n| *n < 5);
//! assert_eq!(small.collect_items().await, vec![1, 2, 3, 4]);
//! # }
//! ```
//!
//! # See Also
//!
//! - [`TakeItemsExt::take_items`](crate::TakeItemsExt::take_items) - take a fixed count
//! - [`DropWhileItemsExt::drop_while_items`](crate::DropWhileItemsExt::drop_while_items) - the complement

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `take_while_items` operator for streams.
pub trait TakeWhileItemsExt<T>: Stream<Item = T> + Sized {
    /// Forwards items while `predicate` holds, then closes the output.
    ///
    /// See the [module-level documentation](crate::take_while_items) for details.
    fn take_while_items<P>(self, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.take_while_items_n(DEFAULT_CAPACITY, predicate)
    }

    /// Like [`take_while_items`](Self::take_while_items), with an output of the given capacity.
    fn take_while_items_n<P>(self, capacity: usize, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<S, T> TakeWhileItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn take_while_items_n<P>(self, capacity: usize, mut predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        spawn_stage("take_while_items", self, capacity, move |item| {
            if predicate(&item) {
                Step::Emit(item)
            } else {
                Step::Stop
            }
        })
    }
}
