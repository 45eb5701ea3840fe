// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Fan-in operator combining many streams into one.
//!
//! [`merge_n`] spawns one reader task per input. Every reader forwards its
//! input into the shared output and, when its input ends, decrements a shared
//! counter of live readers. The reader that brings the counter to zero closes
//! the output, so the output closes exactly once, after the last input.
//!
//! ## Characteristics
//!
//! - **Exactly once**: every input item is delivered once
//! - **Per-input order**: items of one input keep their relative order
//! - **No global order**: items of different inputs interleave arbitrarily
//! - **Zero inputs**: yields a stream that is already closed
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, merge, CollectItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let merged = merge([generate([1, 2, 3]), generate([10, 20])]);
//!
//! let mut all = merged.collect_items().await;
//! all.sort();
//! assert_eq!(all, vec![1, 2, 3, 10, 20]);
//! # }
//! ```

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Merges `streams` into a zero-capacity output.
pub fn merge<I, S>(streams: I) -> Receiver<S::Item>
where
    I: IntoIterator<Item = S>,
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    merge_n(DEFAULT_CAPACITY, streams)
}

/// Merges `streams` into an output of the given capacity.
///
/// See the [module-level documentation](crate::merge) for ordering guarantees.
pub fn merge_n<I, S>(capacity: usize, streams: I) -> Receiver<S::Item>
where
    I: IntoIterator<Item = S>,
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
{
    let (tx, rx) = channel(capacity);
    let streams: Vec<S> = streams.into_iter().collect();

    if streams.is_empty() {
        tx.close();
        return rx;
    }

    let live_readers = Arc::new(AtomicUsize::new(streams.len()));

    for stream in streams {
        let tx = tx.clone();
        let live_readers = live_readers.clone();

        spawn_producer("merge", async move {
            let mut stream = Box::pin(stream);
            while let Some(item) = stream.next().await {
                if tx.send(item).await.is_err() {
                    debug!("merge: output has no readers left, stopping reader");
                    break;
                }
            }

            // AcqRel: the last reader must observe every other reader's sends before closing.
            if live_readers.fetch_sub(1, Ordering::AcqRel) == 1 {
                debug!("merge: last input finished, closing output");
                tx.close();
            }
        });
    }

    rx
}

/// Extension trait providing the `merge_items` operator for streams.
pub trait MergeItemsExt<T>: Stream<Item = T> + Sized {
    /// Merges `self` with `others` into a zero-capacity output.
    fn merge_items<I>(self, others: I) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        I: IntoIterator<Item = Self>,
    {
        self.merge_items_n(DEFAULT_CAPACITY, others)
    }

    /// Like [`merge_items`](Self::merge_items), with an output of the given capacity.
    fn merge_items_n<I>(self, capacity: usize, others: I) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        I: IntoIterator<Item = Self>;
}

impl<S, T> MergeItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn merge_items_n<I>(self, capacity: usize, others: I) -> Receiver<T>
    where
        Self: Send + 'static,
        T: Send + 'static,
        I: IntoIterator<Item = Self>,
    {
        merge_n(capacity, core::iter::once(self).chain(others))
    }
}
