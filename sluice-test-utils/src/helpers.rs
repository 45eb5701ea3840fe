// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::stream::StreamExt;
use futures::Stream;
use std::time::Duration;
use tokio::time::{sleep, timeout};

/// Reads the stream to its end, failing the test if that takes longer than `timeout_ms`.
pub async fn collect_with_timeout<S, T>(stream: &mut S, timeout_ms: u64) -> Vec<T>
where
    S: Stream<Item = T> + Unpin,
{
    let mut items = Vec::new();
    let drained = timeout(Duration::from_millis(timeout_ms), async {
        while let Some(item) = stream.next().await {
            items.push(item);
        }
    })
    .await;

    if drained.is_err() {
        panic!(
            "Stream did not end within {timeout_ms}ms; collected {} items so far",
            items.len()
        );
    }
    items
}

/// Returns the next item, failing the test if the stream ends or stalls.
pub async fn unwrap_stream<S, T>(stream: &mut S, timeout_ms: u64) -> T
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(Some(item)) => item,
        Ok(None) => panic!("Expected an item, but the stream ended"),
        Err(_) => panic!("Timeout: no item received within {timeout_ms}ms"),
    }
}

/// Asserts that the stream reports its end within `timeout_ms`.
pub async fn assert_stream_ended<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    match timeout(Duration::from_millis(timeout_ms), stream.next()).await {
        Ok(None) => {}
        Ok(Some(_)) => panic!("Expected the stream to end, but it emitted an item"),
        Err(_) => panic!("Timeout: stream did not end within {timeout_ms}ms"),
    }
}

/// Asserts that nothing is emitted for `timeout_ms`; the stream must not end either.
pub async fn assert_no_element_emitted<S, T>(stream: &mut S, timeout_ms: u64)
where
    S: Stream<Item = T> + Unpin,
{
    tokio::select! {
        state = stream.next() => {
            match state {
                Some(_) => panic!("Unexpected item emitted, expected no output."),
                None => panic!("Unexpected end of stream, expected it to stay open."),
            }
        }
        () = sleep(Duration::from_millis(timeout_ms)) => {}
    }
}
