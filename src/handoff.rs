//! Single-producer/single-consumer handoff of completed MIDI messages.
//!
//! The input context (serial interrupt on hardware, the midir callback thread
//! here) publishes whole [`MidiMessage`] values; the event loop takes them.
//! Each message is a `Copy` value pushed in one operation, so the reader can
//! never observe a status byte without its data bytes.

use crate::midi::MidiMessage;
use crossbeam::queue::ArrayQueue;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};

/// Completed messages buffered between input and the event loop.
pub const MAILBOX_CAPACITY: usize = 16;

pub struct MessageMailbox {
    queue: ArrayQueue<MidiMessage>,
    dropped: AtomicU64,
}

impl Default for MessageMailbox {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageMailbox {
    pub fn new() -> Self {
        Self::with_capacity(MAILBOX_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MessageMailbox {
            queue: ArrayQueue::new(capacity.max(1)),
            dropped: AtomicU64::new(0),
        }
    }

    /// Publishes a message. Never blocks; when full the oldest message goes.
    pub fn publish(&self, msg: MidiMessage) {
        if let Some(old) = self.queue.force_push(msg) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            debug!("Mailbox full, dropped {:02X?}", old.as_bytes());
        }
    }

    /// Takes the oldest unread message.
    pub fn take(&self) -> Option<MidiMessage> {
        self.queue.pop()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Messages lost to overflow since creation.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}
