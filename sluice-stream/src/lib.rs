// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent stream operators connected by bounded, close-aware channels.
//!
//! Every operator takes an upstream [`Stream`](futures::Stream), spawns one
//! producer task, and hands back the [`Receiver`] end of a fresh output channel.
//! The producer closes its output exactly once, after its upstream ends.
//! Downstream stages therefore observe end-of-stream as a `None` from
//! [`Receiver::recv`] or from the `Stream` implementation of [`Receiver`].
//!
//! ## Operator Categories
//!
//! ### Sources and sinks
//!
//! - **[`generate`]**: emits a finite sequence, then closes
//! - **[`collect_items`](CollectItemsExt::collect_items)**: gathers a stream into a `Vec`
//! - **[`drop_all`](DropAllExt::drop_all)**: discards everything a receiver still holds
//!
//! ### One-to-one stages
//!
//! - **[`map_items`](MapItemsExt::map_items)**, **[`filter_items`](FilterItemsExt::filter_items)**,
//!   **[`peek_items`](PeekItemsExt::peek_items)**, **[`flatten_items`](FlattenItemsExt::flatten_items)**
//! - **[`compact_items`](CompactItemsExt::compact_items)**: drops consecutive duplicates
//! - **[`take_while_items`](TakeWhileItemsExt::take_while_items)**,
//!   **[`drop_while_items`](DropWhileItemsExt::drop_while_items)**
//! - **[`take_items`](TakeItemsExt::take_items)**, **[`drop_items`](DropItemsExt::drop_items)**
//!
//! ### Fan-in and fan-out
//!
//! - **[`merge`]**: interleaves any number of streams, closing after the last one ends
//! - **[`zip_items`](ZipItemsExt::zip_items)**: joins two streams pairwise
//! - **[`partition_items`](PartitionItemsExt::partition_items)**,
//!   **[`unzip_items`](UnzipItemsExt::unzip_items)**: route into two outputs
//!
//! ## Capacity
//!
//! Each operator comes in two forms. The plain form uses [`DEFAULT_CAPACITY`]
//! (`0`, a synchronous hand-off); the `_n` form takes the capacity of the
//! output channel explicitly.
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let words = generate(["a", "a", "b", "c", "c"]).compact_items(|a, b| a == b);
//! let upper = words.map_items_n(4, |w| w.to_uppercase());
//! assert_eq!(upper.collect_items().await, vec!["A", "B", "C"]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
extern crate sluice_core;

mod stage;

pub mod collect_items;
pub mod compact_items;
pub mod drop_all;
pub mod drop_items;
pub mod drop_while_items;
pub mod filter_items;
pub mod flatten_items;
pub mod generate;
pub mod map_items;
pub mod merge;
pub mod partition_items;
pub mod peek_items;
pub mod prelude;
pub mod take_items;
pub mod take_while_items;
pub mod unzip_items;
pub mod zip_items;

pub use collect_items::CollectItemsExt;
pub use compact_items::CompactItemsExt;
pub use drop_all::DropAllExt;
pub use drop_items::DropItemsExt;
pub use drop_while_items::DropWhileItemsExt;
pub use filter_items::FilterItemsExt;
pub use flatten_items::FlattenItemsExt;
pub use generate::{generate, generate_n};
pub use map_items::MapItemsExt;
pub use merge::{merge, merge_n, MergeItemsExt};
pub use partition_items::PartitionItemsExt;
pub use peek_items::PeekItemsExt;
pub use take_items::TakeItemsExt;
pub use take_while_items::TakeWhileItemsExt;
pub use unzip_items::UnzipItemsExt;
pub use zip_items::ZipItemsExt;

pub use sluice_core::{channel, compare, Receiver, SendError, Sender, TryRecvError, DEFAULT_CAPACITY};
