// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Side-effect operator for observing items as they pass.
//!
//! `peek_items` calls a function with a reference to every item and forwards
//! the item unchanged. It is the pipeline equivalent of inserting a
//! `println!`, and is handy for counting or logging between stages.
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, FilterItemsExt, PeekItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let kept = generate(1..=4)
//!     .peek_items(|v| println!("before filter: {v}"))
//!     .filter_items(|v| v % 2 == 1);
//!
//! assert_eq!(kept.collect_items().await, vec![1, 3]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `peek_items` operator for streams.
pub trait PeekItemsExt<T>: Stream<Item = T> + Sized {
    /// Calls `f` on every item, forwarding items unchanged.
    fn peek_items<F>(self, f: F) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        self.peek_items_n(DEFAULT_CAPACITY, f)
    }

    /// Like [`peek_items`](Self::peek_items), with an output of the given capacity.
    fn peek_items_n<F>(self, capacity: usize, f: F) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(&T) + Send + 'static;
}

impl<S, T> PeekItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn peek_items_n<F>(self, capacity: usize, mut f: F) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        F: FnMut(&T) + Send + 'static,
    {
        spawn_stage("peek_items", self, capacity, move |item| {
            f(&item);
            Step::Emit(item)
        })
    }
}
