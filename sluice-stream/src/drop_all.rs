// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Draining operator releasing a producer nobody wants to read.
//!
//! A producer blocked on a send stays blocked until somebody receives. When
//! the values are not needed, [`drop_all`](DropAllExt::drop_all) reads and
//! discards everything until the channel is closed, so the producer runs to
//! completion. Afterwards the channel reports itself closed and empty.
//!
//! ```rust
//! use sluice_stream::{generate, DropAllExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let unwanted = generate(1..=4);
//! unwanted.drop_all().await;
//!
//! assert!(unwanted.is_terminated());
//! assert_eq!(unwanted.recv().await, None);
//! # }
//! ```

use core::future::Future;
use sluice_core::{spawn_producer, Receiver};

/// Extension trait providing `drop_all` for channel receivers.
pub trait DropAllExt {
    /// Receives and discards items until the channel is closed and drained.
    fn drop_all(&self) -> impl Future<Output = ()> + Send;

    /// Like [`drop_all`](Self::drop_all), but drains on a detached task and returns immediately.
    fn drop_all_detached(&self);
}

impl<T> DropAllExt for Receiver<T>
where
    T: Send + 'static,
{
    fn drop_all(&self) -> impl Future<Output = ()> + Send {
        async move {
            let mut discarded = 0usize;
            while self.recv().await.is_some() {
                discarded += 1;
            }
            trace!("drop_all: discarded {} items", discarded);
        }
    }

    fn drop_all_detached(&self) {
        let receiver = self.clone();
        spawn_producer("drop_all", async move {
            receiver.drop_all().await;
        });
    }
}
