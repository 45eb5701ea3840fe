// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout};

#[tokio::test]
async fn test_take_items_then_drain_original() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=9);

    // Act
    let mut head = source.clone().take_items(3);
    let taken = collect_with_timeout(&mut head, 500).await;
    let mut rest = source;
    let remainder = collect_with_timeout(&mut rest, 500).await;

    // Assert
    assert_eq!(taken, vec![1, 2, 3]);
    assert_eq!(remainder, vec![4, 5, 6, 7, 8, 9]);

    Ok(())
}

#[tokio::test]
async fn test_take_items_zero_reads_nothing() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=3);

    // Act
    let mut head = source.clone().take_items(0);
    assert_stream_ended(&mut head, 500).await;
    let mut rest = source;

    // Assert
    assert_eq!(collect_with_timeout(&mut rest, 500).await, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_take_items_more_than_available() -> anyhow::Result<()> {
    // Arrange
    let source = generate(["x", "y"]);

    // Act
    let mut head = source.take_items_n(4, 10);

    // Assert
    assert_eq!(collect_with_timeout(&mut head, 500).await, vec!["x", "y"]);

    Ok(())
}

#[tokio::test]
async fn test_take_items_after_filter() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=100);

    // Act
    let mut head = source.filter_items(|n| n % 7 == 0).take_items(3);

    // Assert
    assert_eq!(collect_with_timeout(&mut head, 500).await, vec![7, 14, 21]);

    Ok(())
}
