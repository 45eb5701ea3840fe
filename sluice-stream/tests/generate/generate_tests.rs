// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout, unwrap_stream};
use std::time::Duration;

#[tokio::test]
async fn test_generate_emits_values_in_order() -> anyhow::Result<()> {
    // Arrange
    let mut numbers = generate([3, 1, 2]);

    // Act
    let received = collect_with_timeout(&mut numbers, 500).await;

    // Assert
    assert_eq!(received, vec![3, 1, 2]);

    Ok(())
}

#[tokio::test]
async fn test_generate_empty_sequence_is_closed() -> anyhow::Result<()> {
    // Arrange
    let mut nothing = generate(Vec::<i32>::new());

    // Act & Assert
    assert_stream_ended(&mut nothing, 500).await;
    assert!(nothing.is_terminated());

    Ok(())
}

#[tokio::test]
async fn test_generate_n_runs_ahead_up_to_capacity() -> anyhow::Result<()> {
    // Arrange
    let mut numbers = generate_n(3, 1..=10);

    // Act
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Assert
    assert_eq!(numbers.len(), 3);
    assert_eq!(unwrap_stream(&mut numbers, 500).await, 1);

    Ok(())
}

#[tokio::test]
async fn test_generate_zero_capacity_holds_nothing() -> anyhow::Result<()> {
    // Arrange
    let mut numbers = generate(1..=10);

    // Act
    tokio::time::sleep(Duration::from_millis(20)).await;

    // Assert - at most the item being handed off is pending
    assert!(numbers.len() <= 1);
    assert_eq!(numbers.capacity(), 0);
    assert_eq!(unwrap_stream(&mut numbers, 500).await, 1);

    Ok(())
}
