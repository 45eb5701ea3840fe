// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout};

#[tokio::test]
async fn test_drop_items_skips_prefix() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=9);

    // Act
    let mut tail = source.drop_items(3);

    // Assert
    assert_eq!(
        collect_with_timeout(&mut tail, 500).await,
        vec![4, 5, 6, 7, 8, 9]
    );

    Ok(())
}

#[tokio::test]
async fn test_drop_items_zero_forwards_everything() -> anyhow::Result<()> {
    // Arrange
    let source = generate([1, 2]);

    // Act
    let mut tail = source.drop_items_n(2, 0);

    // Assert
    assert_eq!(collect_with_timeout(&mut tail, 500).await, vec![1, 2]);

    Ok(())
}

#[tokio::test]
async fn test_drop_items_more_than_available() -> anyhow::Result<()> {
    // Arrange
    let source = generate([1, 2]);

    // Act
    let mut tail = source.drop_items(5);

    // Assert
    assert_stream_ended(&mut tail, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_take_and_drop_split_a_sequence() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=6);

    // Act
    let mut middle = source.drop_items(2).take_items(2);

    // Assert
    assert_eq!(collect_with_timeout(&mut middle, 500).await, vec![3, 4]);

    Ok(())
}
