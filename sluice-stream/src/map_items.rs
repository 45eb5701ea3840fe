// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Map operator applying a function to every item.
//!
//! ## Characteristics
//!
//! - **Length-preserving**: one output per input
//! - **Order-preserving**: outputs appear in input order
//! - **Spawns task**: mapping runs in its own producer task
//!
//! ## Example
//!
//! ```rust
//! use sluice_stream::{generate, CollectItemsExt, MapItemsExt};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let labels = generate([1, 2, 3]).map_items(|n| format!("#{n}"));
//! assert_eq!(labels.collect_items().await, vec!["#1", "#2", "#3"]);
//! # }
//! ```

use crate::stage::{spawn_stage, Step};
use futures::Stream;
use sluice_core::{Receiver, DEFAULT_CAPACITY};

/// Extension trait providing the `map_items` operator for streams.
pub trait MapItemsExt<T>: Stream<Item = T> + Sized {
    /// Emits `f(x)` for every input `x`, through a zero-capacity output.
    ///
    /// See the [module-level documentation](crate::map_items) for details.
    fn map_items<U, F>(self, f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        self.map_items_n(DEFAULT_CAPACITY, f)
    }

    /// Emits `f(x)` for every input `x`, through an output of the given capacity.
    fn map_items_n<U, F>(self, capacity: usize, f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static;
}

impl<S, T> MapItemsExt<T> for S
where
    S: Stream<Item = T>,
{
    fn map_items_n<U, F>(self, capacity: usize, mut f: F) -> Receiver<U>
    where
        Self: Send + 'static,
        T: Send + 'static,
        U: Send + 'static,
        F: FnMut(T) -> U + Send + 'static,
    {
        spawn_stage("map_items", self, capacity, move |item| Step::Emit(f(item)))
    }
}
