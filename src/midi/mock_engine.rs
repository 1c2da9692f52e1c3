use crate::handoff::MessageMailbox;
use crate::midi::{MessageAssembler, MidiEngine, MidiError, Result};
use std::sync::Arc;

/// Scripted byte source for tests.
///
/// `open` runs the scripted bytes through a fresh assembler exactly as the
/// receive context would, publishing every completed message.
pub struct MockMidiEngine {
    devices: Vec<String>,
    script: Vec<u8>,
    open: bool,
}

impl Default for MockMidiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockMidiEngine {
    pub fn new() -> Self {
        MockMidiEngine {
            devices: vec!["Mock Device 1".to_string(), "Mock Device 2".to_string()],
            script: Vec::new(),
            open: false,
        }
    }

    /// Bytes delivered on the next `open`.
    pub fn with_bytes(mut self, bytes: &[u8]) -> Self {
        self.script.extend_from_slice(bytes);
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl MidiEngine for MockMidiEngine {
    fn list_devices(&self) -> Vec<String> {
        self.devices.clone()
    }

    fn open(&mut self, device_name: &str, mailbox: Arc<MessageMailbox>) -> Result<()> {
        if !self.devices.iter().any(|d| d.contains(device_name)) {
            return Err(MidiError::DeviceNotFound(device_name.to_string()));
        }

        let mut assembler = MessageAssembler::new();
        assembler.feed_all(&self.script, |msg| mailbox.publish(msg));
        self.script.clear();
        self.open = true;
        Ok(())
    }

    fn close(&mut self) {
        self.open = false;
    }
}
