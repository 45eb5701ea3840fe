// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Source-tagged fixtures for fan-in tests.

use std::collections::HashMap;
use std::fmt::{self, Display};

/// One element produced by source `source`, the `seq`-th it sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Packet {
    pub source: usize,
    pub seq: usize,
}

impl Packet {
    #[must_use]
    pub const fn new(source: usize, seq: usize) -> Self {
        Self { source, seq }
    }
}

impl Display for Packet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packet[source={}, seq={}]", self.source, self.seq)
    }
}

/// `count` packets from `source`, numbered from zero.
#[must_use]
pub fn packets(source: usize, count: usize) -> Vec<Packet> {
    (0..count).map(|seq| Packet::new(source, seq)).collect()
}

/// Panics unless every source's packets appear in increasing `seq` order.
pub fn assert_per_source_order(received: &[Packet]) {
    let mut last_seen: HashMap<usize, usize> = HashMap::new();
    for packet in received {
        if let Some(previous) = last_seen.insert(packet.source, packet.seq) {
            assert!(
                previous < packet.seq,
                "{packet} arrived after seq={previous} of the same source"
            );
        }
    }
}
