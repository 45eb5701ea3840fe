// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Foundations for concurrently produced, concurrently consumed streams.
//!
//! This crate provides the pieces every `sluice` operator is built from:
//!
//! - [`channel`](channel::channel): a bounded FIFO queue with a one-shot close,
//!   supporting capacity `0` (rendezvous hand-off)
//! - [`spawn_producer`]: detached producer tasks on the configured runtime
//! - [`compare`]: small comparison helpers handed to operators as predicates
//! - a conditional logging shim ([`trace!`], [`debug!`], [`warn!`])

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]

#[macro_use]
pub mod logging;

pub mod channel;
pub mod compare;
pub mod error;
pub mod producer;

pub use self::channel::{channel, Receiver, Sender};
pub use self::error::{SendError, TryRecvError};
pub use self::producer::spawn_producer;

#[cfg(feature = "tracing")]
#[doc(hidden)]
pub use tracing;

/// Capacity used by the operator variants that do not take an explicit capacity.
///
/// A capacity of `0` makes every send a synchronous hand-off to a consumer.
pub const DEFAULT_CAPACITY: usize = 0;
