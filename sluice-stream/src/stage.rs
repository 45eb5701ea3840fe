// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Shared producer loop for single-input, single-output operators.

use futures::{Stream, StreamExt};
use sluice_core::{channel, spawn_producer, Receiver};

/// What a stage does with one upstream item.
pub(crate) enum Step<U> {
    /// Forward a value downstream.
    Emit(U),
    /// Discard the item and keep reading.
    Skip,
    /// Discard the item and stop forwarding; the upstream is left as is.
    Stop,
}

/// Spawns a producer that feeds every upstream item through `step`.
///
/// The output is closed exactly once: after the upstream ends, after `step`
/// asks to stop, or after the output loses its last reader.
pub(crate) fn spawn_stage<S, U, F>(
    name: &'static str,
    source: S,
    capacity: usize,
    mut step: F,
) -> Receiver<U>
where
    S: Stream + Send + 'static,
    S::Item: Send + 'static,
    U: Send + 'static,
    F: FnMut(S::Item) -> Step<U> + Send + 'static,
{
    let (tx, rx) = channel(capacity);

    spawn_producer(name, async move {
        let mut source = Box::pin(source);
        while let Some(item) = source.next().await {
            match step(item) {
                Step::Emit(value) => {
                    if tx.send(value).await.is_err() {
                        debug!("{}: output has no readers left, stopping", name);
                        break;
                    }
                }
                Step::Skip => {}
                Step::Stop => break,
            }
        }
        tx.close();
    });

    rx
}
