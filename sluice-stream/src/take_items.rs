// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Take operator forwarding the first `n` items.
//!
//! The count is checked *before* each read, so `take_items(n)` never pulls
//! item `n + 1` out of the upstream. Once `n` items have been forwarded (or
//! the upstream ended earlier) the output closes.
//!
//! # Shared upstream
//!
//! `take_items` is a filtering view, not an owning split. When the upstream is
//! a [`Receiver`], hand the operator a clone and keep the original: after the
//! taken prefix, the original handle still yields the remainder. Be aware that
//! a zero-capacity upstream keeps its producer blocked on the next item until
//! somebody reads it (or every handle is dropped).
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, TakeItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let source = generate(1..=9);
//! let head = source.clone().take_items(3);
//!
//! assert_eq!(head.collect_items().await, vec![1, 2, 3]);
//! assert_eq!(source.collect_items().await, vec![4, 5, 6, 7, 8, 9]);
//! # }
//! ```
//!
//! # See Also
//!
//! - [`DropItemsExt::drop_items`](crate::DropItemsExt::drop_items) - skip the first `n` items

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `take_items` operator for streams.
pub trait TakeItemsExt<T>: Stream<Item = T> + Sized {
    /// Forwards at most the first `n` items, then closes the output.
    ///
    /// See the [module-level documentation](crate::take_items) for details.
    fn take_items(self, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        self.take_items_n(DEFAULT_CAPACITY, n)
    }

    /// Like [`take_items`](Self::take_items), with an output of the given capacity.
    fn take_items_n(self, capacity: usize, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static;
}

impl<S, T> TakeItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn take_items_n(self, capacity: usize, n: usize) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = channel(capacity);

        spawn_producer("take_items", async move {
            let mut source = Box::pin(self);
            let mut forwarded = 0;
            while forwarded < n {
                let Some(item) = source.next().await else {
                    break;
                };
                if tx.send(item).await.is_err() {
                    debug!("take_items: output has no readers left, stopping");
                    break;
                }
                forwarded += 1;
            }
            tx.close();
        });

        rx
    }
}
