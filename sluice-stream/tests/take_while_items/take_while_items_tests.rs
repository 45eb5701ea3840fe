// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_core::compare::less;
use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout};

#[tokio::test]
async fn test_take_while_items_stops_at_first_failure() -> anyhow::Result<()> {
    // Arrange
    let source = generate([1, 2, 3, 10, 4, 5]);

    // Act
    let mut head = source.take_while_items(|n| *n < 5);

    // Assert
    assert_eq!(collect_with_timeout(&mut head, 500).await, vec![1, 2, 3]);

    Ok(())
}

#[tokio::test]
async fn test_take_while_items_consumes_the_failing_item() -> anyhow::Result<()> {
    // Arrange
    let source = generate(1..=6);

    // Act
    let mut head = source.clone().take_while_items(|n| less(n, &3));
    let taken = collect_with_timeout(&mut head, 500).await;
    let mut rest = source;
    let remainder = collect_with_timeout(&mut rest, 500).await;

    // Assert - 3 failed the predicate and was discarded
    assert_eq!(taken, vec![1, 2]);
    assert_eq!(remainder, vec![4, 5, 6]);

    Ok(())
}

#[tokio::test]
async fn test_take_while_items_first_item_fails() -> anyhow::Result<()> {
    // Arrange
    let source = generate([9, 1, 2]);

    // Act
    let mut head = source.take_while_items_n(4, |n| *n < 5);

    // Assert
    assert_stream_ended(&mut head, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_take_while_items_all_pass() -> anyhow::Result<()> {
    // Arrange
    let source = generate(["a", "b"]);

    // Act
    let mut head = source.take_while_items(|s| !s.is_empty());

    // Assert
    assert_eq!(collect_with_timeout(&mut head, 500).await, vec!["a", "b"]);

    Ok(())
}
