// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Concurrent stream pipelines over bounded, close-aware channels.
//!
//! A pipeline is a chain of stages. Each stage runs as its own producer task,
//! reads from its upstream, and writes into a bounded channel that the next
//! stage reads. Because every channel is bounded (capacity `0` by default), a
//! slow consumer slows down every stage upstream of it.
//!
//! This crate re-exports [`sluice_core`] (channels, producer tasks, comparison
//! helpers) and [`sluice_stream`] (the operators).
//!
//! ```rust
//! use sluice::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let readings = generate([3, 3, 0, 7, 7, 7, 2]);
//!
//! let cleaned = readings
//!     .filter_items(compare::is_not_zero())
//!     .compact_items(compare::equal);
//!
//! assert_eq!(cleaned.collect_items().await, vec![3, 7, 2]);
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

pub use sluice_core::spawn_producer;
pub use sluice_stream::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use sluice_core::compare;
    pub use sluice_core::{spawn_producer, DEFAULT_CAPACITY};
    pub use sluice_stream::prelude::*;
}
