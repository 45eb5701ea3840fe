// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Drop-while operator discarding a leading run of items.
//!
//! Items are discarded while `predicate` holds. From the first item for which
//! it fails (that item included), everything is forwarded and the predicate is
//! not consulted again.
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, DropWhileItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let rest = generate([1, 2, 7, 1, 2]).drop_while_items(|n| *n < 5);
//! assert_eq!(rest.collect_items().await, vec![7, 1, 2]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `drop_while_items` operator for streams.
pub trait DropWhileItemsExt<T>: Stream<Item = T> + Sized {
    /// Discards items while `predicate` holds, then forwards everything.
    ///
    /// See the [module-level documentation](crate::drop_while_items) for details.
    fn drop_while_items<P>(self, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        self.drop_while_items_n(DEFAULT_CAPACITY, predicate)
    }

    /// Like [`drop_while_items`](Self::drop_while_items), with an output of the given capacity.
    fn drop_while_items_n<P>(self, capacity: usize, predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static;
}

impl<S, T> DropWhileItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn drop_while_items_n<P>(self, capacity: usize, mut predicate: P) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        P: FnMut(&T) -> bool + Send + 'static,
    {
        let mut dropping = true;

        spawn_stage("drop_while_items", self, capacity, move |item| {
            if dropping && predicate(&item) {
                return Step::Skip;
            }
            dropping = false;
            Step::Emit(item)
        })
    }
}
