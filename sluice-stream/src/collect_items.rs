// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Terminal operator gathering a whole stream into a `Vec`.

use core::future::Future;
use futures::{Stream, StreamExt};

/// Extension trait providing the `collect_items` terminal for streams.
pub trait CollectItemsExt<T>: Stream<Item = T> + Sized {
    /// Reads every item, in delivery order, until the stream ends.
    ///
    /// The returned future completes only once the stream is closed, so it
    /// never completes for a stream whose producer never closes.
    fn collect_items(self) -> impl Future<Output = Vec<T>> + Send
    where
        Self: Send,
        T: Send;
}

impl<S, T> CollectItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn collect_items(self) -> impl Future<Output = Vec<T>> + Send
    where
        Self: Send,
        T: Send,
    {
        async move {
            let mut stream = Box::pin(self);
            let mut items = Vec::new();
            while let Some(item) = stream.next().await {
                items.push(item);
            }
            items
        }
    }
}
