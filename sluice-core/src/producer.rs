// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Runtime-agnostic spawning of producer tasks.
//!
//! Every stream operator runs as a detached producer task that reads its
//! input, writes its output channel, and closes that channel when done.
//!
//! # Runtime Support
//!
//! - **Tokio**: `tokio::spawn` (default, feature `runtime-tokio`)
//! - **smol**: `smol::spawn(..).detach()` (feature `runtime-smol`)
//!
//! There is no join handle and no cancellation: a producer ends when its input
//! ends or when nobody can read its output any more.

use core::future::Future;

#[cfg(not(any(feature = "runtime-tokio", feature = "runtime-smol")))]
compile_error!("sluice-core requires either the `runtime-tokio` or the `runtime-smol` feature");

/// Spawns a detached producer task on the configured runtime.
///
/// `name` identifies the operator in trace output.
///
/// # Panics
///
/// With `runtime-tokio`, panics if called outside a Tokio runtime.
///
/// # Example
///
/// ```rust
/// use sluice_core::{channel, spawn_producer};
///
/// # #[tokio::main]
/// # async fn main() {
/// let (tx, rx) = channel(0);
///
/// spawn_producer("countdown", async move {
///     for n in (1..=3).rev() {
///         if tx.send(n).await.is_err() {
///             break;
///         }
///     }
///     tx.close();
/// });
///
/// assert_eq!(rx.recv().await, Some(3));
/// # }
/// ```
pub fn spawn_producer<Fut>(name: &'static str, future: Fut)
where
    Fut: Future<Output = ()> + Send + 'static,
{
    let task = async move {
        trace!("producer {} started", name);
        future.await;
        trace!("producer {} finished", name);
    };

    #[cfg(feature = "runtime-tokio")]
    drop(tokio::spawn(task));

    #[cfg(all(feature = "runtime-smol", not(feature = "runtime-tokio")))]
    smol::spawn(task).detach();
}
