// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{
    assert_per_source_order, assert_stream_ended, collect_with_timeout, jittered, packets, Packet,
};

#[tokio::test]
async fn test_merge_is_multiset_union() -> anyhow::Result<()> {
    // Arrange
    let inputs = vec![generate([1, 2, 3]), generate([10, 20]), generate([100])];

    // Act
    let mut merged = merge(inputs);
    let mut received = collect_with_timeout(&mut merged, 500).await;

    // Assert
    received.sort_unstable();
    assert_eq!(received, vec![1, 2, 3, 10, 20, 100]);

    Ok(())
}

#[tokio::test]
async fn test_merge_zero_inputs_is_closed() -> anyhow::Result<()> {
    // Arrange
    let inputs: Vec<Receiver<i32>> = Vec::new();

    // Act
    let mut merged = merge(inputs);

    // Assert
    assert_stream_ended(&mut merged, 500).await;
    assert!(merged.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_merge_single_input_keeps_order() -> anyhow::Result<()> {
    // Arrange
    let inputs = [generate(0..20)];

    // Act
    let mut merged = merge_n(3, inputs);

    // Assert
    assert_eq!(
        collect_with_timeout(&mut merged, 500).await,
        (0..20).collect::<Vec<_>>()
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_merge_jittered_inputs_keep_per_source_order() -> anyhow::Result<()> {
    // Arrange
    let inputs: Vec<_> = (0..8).map(|source| jittered(1, packets(source, 50))).collect();

    // Act
    let mut merged = merge_n(4, inputs);
    let received = collect_with_timeout(&mut merged, 5_000).await;

    // Assert
    assert_eq!(received.len(), 8 * 50);
    assert_per_source_order(&received);
    let mut sorted = received.clone();
    sorted.sort_unstable();
    let expected: Vec<Packet> = (0..8).flat_map(|source| packets(source, 50)).collect();
    assert_eq!(sorted, expected);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_merge_closes_once_under_repeated_races() -> anyhow::Result<()> {
    for _ in 0..20 {
        // Arrange
        let inputs: Vec<_> = (0..4).map(|source| jittered(0, packets(source, 3))).collect();

        // Act
        let mut merged = merge(inputs);
        let received = collect_with_timeout(&mut merged, 2_000).await;

        // Assert
        assert_eq!(received.len(), 12);
        assert!(merged.is_terminated());
    }

    Ok(())
}

#[tokio::test]
async fn test_merge_items_method_form() -> anyhow::Result<()> {
    // Arrange
    let first = generate(["a", "b"]);
    let others = [generate(["c"]), generate(["d", "e"])];

    // Act
    let mut merged = first.merge_items(others);
    let mut received = collect_with_timeout(&mut merged, 500).await;

    // Assert
    received.sort_unstable();
    assert_eq!(received, vec!["a", "b", "c", "d", "e"]);

    Ok(())
}

#[tokio::test]
async fn test_merge_stops_readers_when_output_dropped() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=1_000);
    let merged = merge([source.clone()]);

    // Act
    drop(merged);
    let mut rest = source;
    let remainder = collect_with_timeout(&mut rest, 1_000).await;

    // Assert - the reader gave up, so the original handle still sees the tail
    assert!(!remainder.is_empty());
    assert_eq!(remainder.last(), Some(&1_000));

    Ok(())
}
