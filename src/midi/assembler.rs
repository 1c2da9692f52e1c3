use super::message::{expected_len, is_status, MidiMessage, MAX_MESSAGE_LEN};
use log::trace;

/// Builds complete MIDI messages from a byte-at-a-time serial stream.
///
/// A status byte always starts a new message and discards whatever was in
/// progress. Data bytes with no status seen yet, or past the expected length,
/// are dropped.
#[derive(Debug, Clone, Default)]
pub struct MessageAssembler {
    buf: [u8; MAX_MESSAGE_LEN],
    len: usize,
    expected: usize,
}

impl MessageAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one byte, returning the message it completes, if any.
    pub fn feed(&mut self, byte: u8) -> Option<MidiMessage> {
        if is_status(byte) {
            if self.len > 0 && self.len < self.expected {
                trace!(
                    "Discarding partial message {:02X?} on new status {:02X}",
                    &self.buf[..self.len],
                    byte
                );
            }
            self.buf = [byte, 0, 0];
            self.len = 1;
            self.expected = expected_len(byte);
            return None;
        }

        if self.len == 0 || self.len >= self.expected {
            trace!("Dropping stray data byte {:02X}", byte);
            return None;
        }

        self.buf[self.len] = byte;
        self.len += 1;

        if self.len == self.expected {
            Some(MidiMessage::from_raw(self.buf, self.len))
        } else {
            None
        }
    }

    /// Feeds a burst of bytes, calling `on_message` for each completed message.
    pub fn feed_all<F>(&mut self, bytes: &[u8], mut on_message: F)
    where
        F: FnMut(MidiMessage),
    {
        for &byte in bytes {
            if let Some(msg) = self.feed(byte) {
                on_message(msg);
            }
        }
    }
}
