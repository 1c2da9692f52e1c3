//! MIDI input for drumhid
//!
//! This module covers everything on the input side of the translator:
//! - Core MIDI message types and error handling
//! - Byte-at-a-time message assembly
//! - Real MIDI device input via midir
//! - Mock input for testing
//!
//! The main components are:
//! - [`MessageAssembler`] turning a raw byte stream into [`MidiMessage`]s
//! - [`MidiEngine`] trait for opening an input and publishing messages
//! - [`MidirEngine`] for real MIDI devices
//! - [`MockMidiEngine`] for testing
//!
mod assembler;
mod engine;
mod message;
pub mod midir_engine;
pub mod mock_engine;

pub use assembler::MessageAssembler;
pub use engine::{MidiEngine, MidiError, Result};
pub use message::{
    expected_len, is_status, MessageKind, MidiMessage, CHANNEL_PRESSURE, CONTROL_CHANGE,
    MAX_MESSAGE_LEN, NOTE_OFF, NOTE_ON, PROGRAM_CHANGE,
};

pub use midir_engine::MidirEngine;
pub use mock_engine::MockMidiEngine;

// Set default engine type
pub type DefaultMidiEngine = MidirEngine;
