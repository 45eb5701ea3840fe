// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{collect_with_timeout, unwrap_stream};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[tokio::test]
async fn test_peek_items_observes_without_changing() -> anyhow::Result<()> {
    // Arrange
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = seen.clone();
    let source = generate(["a", "b", "c"]);

    // Act
    let mut observed = source.peek_items(move |s| log.lock().unwrap().push(s.to_string()));
    let received = collect_with_timeout(&mut observed, 500).await;

    // Assert
    assert_eq!(received, vec!["a", "b", "c"]);
    assert_eq!(*seen.lock().unwrap(), vec!["a", "b", "c"]);

    Ok(())
}

#[tokio::test]
async fn test_peek_items_runs_only_as_far_as_demand() -> anyhow::Result<()> {
    // Arrange
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let source = generate(1..=10);

    // Act
    let mut observed = source.peek_items(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Assert - a zero-capacity output blocks the stage on its first item
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(unwrap_stream(&mut observed, 500).await, 1);

    Ok(())
}

#[tokio::test]
async fn test_peek_items_n_runs_ahead_by_capacity() -> anyhow::Result<()> {
    // Arrange
    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    let source = generate(1..=10);

    // Act
    let _observed = source.peek_items_n(4, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Assert - four buffered plus one waiting for room
    assert_eq!(count.load(Ordering::SeqCst), 5);

    Ok(())
}
