// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout};

#[tokio::test]
async fn test_drop_while_items_forwards_from_first_failure() -> anyhow::Result<()> {
    // Arrange
    let source = generate([1, 2, 3, 10, 4, 5]);

    // Act
    let mut tail = source.drop_while_items(|n| *n < 5);

    // Assert - later items are forwarded even when they would pass again
    assert_eq!(collect_with_timeout(&mut tail, 500).await, vec![10, 4, 5]);

    Ok(())
}

#[tokio::test]
async fn test_drop_while_items_nothing_dropped() -> anyhow::Result<()> {
    // Arrange
    let source = generate([7, 1]);

    // Act
    let mut tail = source.drop_while_items_n(1, |n| *n < 5);

    // Assert
    assert_eq!(collect_with_timeout(&mut tail, 500).await, vec![7, 1]);

    Ok(())
}

#[tokio::test]
async fn test_drop_while_items_everything_dropped() -> anyhow::Result<()> {
    // Arrange
    let source = generate(0..100);

    // Act
    let mut tail = source.drop_while_items(|_| true);

    // Assert
    assert_stream_ended(&mut tail, 500).await;

    Ok(())
}
