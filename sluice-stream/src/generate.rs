// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source operators turning a finite sequence into a stream.
//!
//! [`generate`] and [`generate_n`] spawn a producer that sends every value in
//! order and then closes the output. An empty sequence yields a stream that is
//! closed right away.
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let numbers = generate([1, 2, 3]);
//! assert_eq!(numbers.collect_items().await, vec![1, 2, 3]);
//! # }
//! ```

use sluice_core::{channel, spawn_producer, Receiver, DEFAULT_CAPACITY};

/// Streams `values` through a zero-capacity channel.
///
/// Each value is handed off only when a consumer takes it.
pub fn generate<I>(values: I) -> Receiver<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    generate_n(DEFAULT_CAPACITY, values)
}

/// Streams `values` through a channel of the given capacity.
///
/// The producer may run up to `capacity` values ahead of the consumer. It
/// stops early if every reader of the output has been dropped.
pub fn generate_n<I>(capacity: usize, values: I) -> Receiver<I::Item>
where
    I: IntoIterator,
    I::IntoIter: Send + 'static,
    I::Item: Send + 'static,
{
    let (tx, rx) = channel(capacity);
    let values = values.into_iter();

    spawn_producer("generate", async move {
        for value in values {
            if tx.send(value).await.is_err() {
                debug!("generate: output has no readers left, stopping");
                break;
            }
        }
        tx.close();
    });

    rx
}
