// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator trait and the channel types.
//!
//! ```rust
//! use sluice_stream::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let squares = generate(1..=4)
//!     .filter_items(|n| n % 2 == 0)
//!     .map_items(|n| n * n);
//! assert_eq!(squares.collect_items().await, vec![4, 16]);
//! # }
//! ```
//!
//! # Contents
//!
//! ## Extension Traits (Operators)
//!
//! - [`MapItemsExt`] - Transform every item
//! - [`FilterItemsExt`] - Keep items matching a predicate
//! - [`CompactItemsExt`] - Suppress consecutive duplicates
//! - [`TakeWhileItemsExt`] / [`DropWhileItemsExt`] - Predicate-bounded prefixes
//! - [`TakeItemsExt`] / [`DropItemsExt`] - Count-bounded prefixes
//! - [`PeekItemsExt`] - Observe items without changing them
//! - [`FlattenItemsExt`] - Expand every item into a sequence
//! - [`MergeItemsExt`] - Interleave with other streams
//! - [`PartitionItemsExt`] / [`UnzipItemsExt`] - Split into two outputs
//! - [`ZipItemsExt`] - Join two streams pairwise
//! - [`CollectItemsExt`] - Gather a stream into a `Vec`
//! - [`DropAllExt`] - Discard everything left in a receiver

pub use crate::collect_items::CollectItemsExt;
pub use crate::compact_items::CompactItemsExt;
pub use crate::drop_all::DropAllExt;
pub use crate::drop_items::DropItemsExt;
pub use crate::drop_while_items::DropWhileItemsExt;
pub use crate::filter_items::FilterItemsExt;
pub use crate::flatten_items::FlattenItemsExt;
pub use crate::generate::{generate, generate_n};
pub use crate::map_items::MapItemsExt;
pub use crate::merge::{merge, merge_n, MergeItemsExt};
pub use crate::partition_items::PartitionItemsExt;
pub use crate::peek_items::PeekItemsExt;
pub use crate::take_items::TakeItemsExt;
pub use crate::take_while_items::TakeWhileItemsExt;
pub use crate::unzip_items::UnzipItemsExt;
pub use crate::zip_items::ZipItemsExt;
pub use sluice_core::{channel, Receiver, Sender};
