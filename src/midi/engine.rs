use crate::handoff::MessageMailbox;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Custom error type for MIDI operations
#[derive(Debug)]
pub enum MidiError {
    /// Error when connecting to a MIDI device
    ConnectionError(String),
    /// No input port matched the requested name
    DeviceNotFound(String),
    /// Error when querying port information
    PortError(String),
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::ConnectionError(msg) => write!(f, "MIDI connection error: {}", msg),
            MidiError::DeviceNotFound(name) => write!(f, "MIDI input device not found: {}", name),
            MidiError::PortError(msg) => write!(f, "MIDI port error: {}", msg),
        }
    }
}

impl Error for MidiError {}

/// Result type for MIDI operations
pub type Result<T> = std::result::Result<T, MidiError>;

/// A source of raw MIDI bytes.
///
/// Implementations own a [`MessageAssembler`](super::MessageAssembler) in
/// their receive context and publish each completed message to the mailbox.
pub trait MidiEngine: Send {
    /// Names of the input ports this engine can open.
    fn list_devices(&self) -> Vec<String>;

    /// Opens the port whose name contains `device_name` and starts publishing.
    fn open(&mut self, device_name: &str, mailbox: Arc<MessageMailbox>) -> Result<()>;

    /// Stops receiving. Already published messages stay in the mailbox.
    fn close(&mut self);
}
