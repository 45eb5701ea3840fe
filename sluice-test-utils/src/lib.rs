// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the sluice stream library.
//!
//! This crate is meant for development and testing only. It provides:
//!
//! - **Timeout-guarded helpers** ([`helpers`]): every helper fails the test
//!   with a descriptive panic instead of hanging when a stream stalls, which
//!   is what a deadlocked pipeline looks like from the outside
//! - **[`Packet`] fixtures** ([`packet`]): values tagged with their source and
//!   sequence number, for checking per-source ordering after a fan-in
//! - **Jittered producers** ([`jitter`]): sources that yield to the scheduler
//!   a random number of times between sends, to shuffle interleavings
//!
//! # Example
//!
//! ```rust
//! use sluice_test_utils::{collect_with_timeout, jittered, packets};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut source = jittered(0, packets(7, 3));
//! let received = collect_with_timeout(&mut source, 1_000).await;
//!
//! assert_eq!(received, packets(7, 3));
//! # }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod helpers;
pub mod jitter;
pub mod packet;

pub use helpers::{
    assert_no_element_emitted, assert_stream_ended, collect_with_timeout, unwrap_stream,
};
pub use jitter::{jittered, jittered_with_seed};
pub use packet::{assert_per_source_order, packets, Packet};
