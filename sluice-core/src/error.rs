// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for channel operations.
//!
//! Operators never surface these errors: a failed send means the downstream
//! side is gone, so the operator stops and closes its own output.

use core::fmt;

/// Returned by [`Sender::send`](crate::Sender::send) when the value can never be delivered.
///
/// This happens once the channel has been closed, or once every
/// [`Receiver`](crate::Receiver) handle has been dropped. The unsent value is
/// handed back to the caller.
#[derive(Clone, PartialEq, Eq, thiserror::Error)]
#[error("sending on a closed or disconnected channel")]
pub struct SendError<T>(pub T);

impl<T> SendError<T> {
    /// Returns the value that could not be sent.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SendError").finish_non_exhaustive()
    }
}

/// Returned by [`Receiver::try_recv`](crate::Receiver::try_recv) when no item is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TryRecvError {
    /// The channel is open but currently holds no items.
    #[error("receiving on an empty channel")]
    Empty,

    /// The channel is closed and every buffered item has been drained.
    #[error("receiving on a closed channel")]
    Closed,
}

impl TryRecvError {
    /// Returns `true` if the channel is empty but still open.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns `true` if the channel is closed and drained.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}
