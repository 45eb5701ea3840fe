// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use sluice_stream::prelude::*;
use sluice_test_utils::{assert_stream_ended, collect_with_timeout};

#[tokio::test]
async fn test_flatten_items_emits_batches_in_order() -> anyhow::Result<()> {
    // Arrange
    let source = generate([vec![1, 2], vec![3], vec![4, 5, 6]]);

    // Act
    let mut flat = source.flatten_items();

    // Assert
    assert_eq!(
        collect_with_timeout(&mut flat, 500).await,
        vec![1, 2, 3, 4, 5, 6]
    );

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_skips_empty_batches() -> anyhow::Result<()> {
    // Arrange
    let source = generate([Vec::new(), vec!['a'], Vec::new()]);

    // Act
    let mut flat = source.flatten_items_n(2);

    // Assert
    assert_eq!(collect_with_timeout(&mut flat, 500).await, vec!['a']);

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_only_empty_batches() -> anyhow::Result<()> {
    // Arrange
    let source = generate([Vec::<u8>::new(), Vec::new()]);

    // Act
    let mut flat = source.flatten_items();

    // Assert
    assert_stream_ended(&mut flat, 500).await;

    Ok(())
}

#[tokio::test]
async fn test_flatten_items_of_split_lines() -> anyhow::Result<()> {
    // Arrange
    let source = generate(["a b", "c"]).map_items(|line| {
        line.split(' ').map(str::to_owned).collect::<Vec<_>>()
    });

    // Act
    let mut words = source.flatten_items();

    // Assert
    assert_eq!(collect_with_timeout(&mut words, 500).await, vec!["a", "b", "c"]);

    Ok(())
}
