//! Translates an electronic drum kit's MIDI note stream into the fixed
//! input report of a rhythm-game drum controller.
//!
//! Data flow: raw byte → [`midi::MessageAssembler`] → [`handoff::MessageMailbox`]
//! → [`translator::Translator`] (note map, controller state, report queue) →
//! [`delivery::DeliveryDriver`] → [`transport::ReportTransport`].

pub mod cli;
pub mod config;
pub mod delivery;
pub mod event_loop;
pub mod handoff;
pub mod logging;
pub mod mapping;
pub mod midi;
pub mod report;
pub mod report_queue;
pub mod state;
pub mod translator;
pub mod transport;

pub use cli::Args;
pub use event_loop::{EventLoop, StopHandle};
pub use handoff::MessageMailbox;
pub use mapping::{map_note, Slot};
pub use report::{HidReport, IDLE_REPORT, REPORT_LEN};
pub use report_queue::ReportQueue;

#[cfg(not(feature = "test-mock"))]
pub fn handle_device_list() -> Vec<String> {
    use midi::MidiEngine;
    midi::DefaultMidiEngine::new().list_devices()
}

#[cfg(feature = "test-mock")]
pub fn handle_device_list() -> Vec<String> {
    use midi::MidiEngine;
    midi::MockMidiEngine::new().list_devices()
}
