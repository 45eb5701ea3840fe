// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Bounded FIFO channel with a one-shot close.
//!
//! A [`channel`] of capacity `N` lets its producer run ahead of the consumer by
//! up to `N` items. Capacity `0` is a rendezvous: [`Sender::send`] does not
//! complete until a receiver has taken the item.
//!
//! ## Characteristics
//!
//! - **Bounded**: sends wait for free space, which is how backpressure travels upstream
//! - **Explicit close**: only [`Sender::close`] closes the channel; dropping a sender does not
//! - **Drain before close**: receivers see every buffered item before they observe the close
//! - **Shared read end**: [`Receiver`] is cheap to clone; each item goes to exactly one reader
//! - **Disconnect**: once every receiver is dropped, pending and future sends fail
//!
//! ## Example
//!
//! ```
//! use sluice_core::channel;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (tx, rx) = channel::<i32>(2);
//!
//! tx.send(1).await.unwrap();
//! tx.send(2).await.unwrap();
//! tx.close();
//!
//! assert_eq!(rx.recv().await, Some(1));
//! assert_eq!(rx.recv().await, Some(2));
//! assert_eq!(rx.recv().await, None);
//! # }
//! ```

use crate::error::{SendError, TryRecvError};
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use event_listener::{Event, EventListener};
use futures::Stream;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Creates a bounded channel holding at most `capacity` items.
///
/// A `capacity` of `0` turns every send into a synchronous hand-off.
#[must_use]
pub fn channel<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let shared = Arc::new(Shared {
        state: Mutex::new(State {
            queue: VecDeque::with_capacity(capacity.max(1)),
            closed: false,
            receivers: 1,
            enqueued: 0,
            dequeued: 0,
        }),
        capacity,
        space_available: Event::new(),
        item_available: Event::new(),
    });

    (
        Sender {
            shared: shared.clone(),
        },
        Receiver {
            shared,
            listener: None,
        },
    )
}

struct State<T> {
    queue: VecDeque<T>,
    closed: bool,
    receivers: usize,
    // Running totals; a rendezvous sender waits until `dequeued` reaches its ticket.
    enqueued: u64,
    dequeued: u64,
}

struct Shared<T> {
    state: Mutex<State<T>>,
    capacity: usize,
    space_available: Event,
    item_available: Event,
}

impl<T> Shared<T> {
    fn slots(&self) -> usize {
        self.capacity.max(1)
    }

    fn wake_all(&self) {
        self.space_available.notify(usize::MAX);
        self.item_available.notify(usize::MAX);
    }
}

/// Write end of a [`channel`].
///
/// Cloning a sender yields another handle to the same channel; any handle may
/// close it.
pub struct Sender<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Sender<T> {
    /// Sends `value`, waiting while the channel is full.
    ///
    /// For a zero-capacity channel this also waits until a receiver has taken
    /// the value.
    ///
    /// # Errors
    ///
    /// Returns [`SendError`] holding `value` if the channel is closed or every
    /// receiver has been dropped.
    pub async fn send(&self, value: T) -> Result<(), SendError<T>> {
        let ticket = loop {
            let listener = {
                let mut state = self.shared.state.lock();
                if state.closed || state.receivers == 0 {
                    return Err(SendError(value));
                }
                if state.queue.len() < self.shared.slots() {
                    state.queue.push_back(value);
                    state.enqueued += 1;
                    break state.enqueued;
                }
                // Registered under the lock so a concurrent receive cannot be missed.
                self.shared.space_available.listen()
            };
            listener.await;
        };

        self.shared.item_available.notify(usize::MAX);

        if self.shared.capacity == 0 {
            loop {
                let listener = {
                    let mut state = self.shared.state.lock();
                    if state.dequeued >= ticket {
                        break;
                    }
                    if state.receivers == 0 {
                        // Single hand-off slot: the undelivered item is ours.
                        if let Some(item) = state.queue.pop_back() {
                            state.enqueued -= 1;
                            return Err(SendError(item));
                        }
                        break;
                    }
                    self.shared.space_available.listen()
                };
                listener.await;
            }
        }

        Ok(())
    }

    /// Closes the channel.
    ///
    /// Buffered items stay available to receivers. Returns `true` only for the
    /// call that actually closed the channel; later calls are no-ops.
    pub fn close(&self) -> bool {
        let newly_closed = {
            let mut state = self.shared.state.lock();
            !core::mem::replace(&mut state.closed, true)
        };
        if newly_closed {
            self.shared.wake_all();
        }
        newly_closed
    }

    /// Returns `true` once the channel has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Returns `true` once every receiver has been dropped.
    #[must_use]
    pub fn is_disconnected(&self) -> bool {
        self.shared.state.lock().receivers == 0
    }

    /// Returns the capacity the channel was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }
}

impl<T> Clone for Sender<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T> fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("capacity", &self.shared.capacity)
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Read end of a [`channel`].
///
/// Receivers are cheap to clone. Clones share one queue, so every item is
/// delivered to exactly one of them. `Receiver` also implements [`Stream`],
/// ending once the channel is closed and drained.
pub struct Receiver<T> {
    shared: Arc<Shared<T>>,
    listener: Option<EventListener>,
}

impl<T> Receiver<T> {
    /// Receives the next item, waiting while the channel is empty and open.
    ///
    /// Returns `None` once the channel is closed and every buffered item has
    /// been received.
    pub async fn recv(&self) -> Option<T> {
        loop {
            match self.recv_or_listen() {
                Ok(item) => return item,
                Err(listener) => listener.await,
            }
        }
    }

    /// Receives the next item without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`TryRecvError::Empty`] if no item is buffered yet, and
    /// [`TryRecvError::Closed`] once the channel is closed and drained.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut state = self.shared.state.lock();
        match self.take_front(&mut state) {
            Some(item) => Ok(item),
            None if state.closed => Err(TryRecvError::Closed),
            None => Err(TryRecvError::Empty),
        }
    }

    /// Returns `true` once the channel has been closed, even if items remain buffered.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.shared.state.lock().closed
    }

    /// Returns `true` once the channel is closed and fully drained.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        let state = self.shared.state.lock();
        state.closed && state.queue.is_empty()
    }

    /// Number of items currently buffered.
    ///
    /// On a zero-capacity channel the item of a send still waiting for its
    /// hand-off counts as buffered, so this is at most `1` there.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shared.state.lock().queue.len()
    }

    /// Returns `true` if no item is currently buffered.
    ///
    /// A pending zero-capacity hand-off counts as buffered, as in [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().queue.is_empty()
    }

    /// Returns the capacity the channel was created with.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.shared.capacity
    }

    fn take_front(&self, state: &mut State<T>) -> Option<T> {
        let item = state.queue.pop_front()?;
        state.dequeued += 1;
        self.shared.space_available.notify(usize::MAX);
        Some(item)
    }

    // Pops an item, reports the end of the channel, or registers for the next wake-up.
    fn recv_or_listen(&self) -> Result<Option<T>, EventListener> {
        let mut state = self.shared.state.lock();
        if let Some(item) = self.take_front(&mut state) {
            return Ok(Some(item));
        }
        if state.closed {
            return Ok(None);
        }
        Err(self.shared.item_available.listen())
    }
}

impl<T> Clone for Receiver<T> {
    fn clone(&self) -> Self {
        self.shared.state.lock().receivers += 1;
        Self {
            shared: self.shared.clone(),
            listener: None,
        }
    }
}

impl<T> Drop for Receiver<T> {
    fn drop(&mut self) {
        let disconnected = {
            let mut state = self.shared.state.lock();
            state.receivers -= 1;
            state.receivers == 0
        };
        if disconnected {
            // Blocked senders must observe that nobody will ever read again.
            self.shared.space_available.notify(usize::MAX);
        }
    }
}

impl<T> Stream for Receiver<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        loop {
            if let Some(listener) = self.listener.as_mut() {
                match Pin::new(listener).poll(cx) {
                    Poll::Ready(()) => self.listener = None,
                    Poll::Pending => return Poll::Pending,
                }
            }

            match self.recv_or_listen() {
                Ok(item) => return Poll::Ready(item),
                Err(listener) => self.listener = Some(listener),
            }
        }
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("Receiver")
            .field("capacity", &self.shared.capacity)
            .field("buffered", &state.queue.len())
            .field("closed", &state.closed)
            .finish()
    }
}
