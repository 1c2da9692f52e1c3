use crate::handoff::MessageMailbox;
use crate::midi::{MessageAssembler, MidiEngine, MidiError, Result};
use log::{debug, info, trace};
use midir::{Ignore, MidiInput, MidiInputConnection};
use std::sync::Arc;

const CLIENT_NAME: &str = "drumhid-in";

/// Receives MIDI through the platform backend via midir.
///
/// The midir callback thread stands in for the serial receive interrupt: it
/// owns the assembler and is the only writer to the mailbox.
pub struct MidirEngine {
    connection: Option<MidiInputConnection<MessageAssembler>>,
}

impl Default for MidirEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MidirEngine {
    pub fn new() -> Self {
        MidirEngine { connection: None }
    }

    fn input() -> Result<MidiInput> {
        let mut midi_in =
            MidiInput::new(CLIENT_NAME).map_err(|e| MidiError::ConnectionError(e.to_string()))?;
        // System exclusive and real-time bytes still reach the assembler; it
        // treats any status byte as the start of a new message.
        midi_in.ignore(Ignore::None);
        Ok(midi_in)
    }
}

impl MidiEngine for MidirEngine {
    fn list_devices(&self) -> Vec<String> {
        let mut devices = Vec::new();

        if let Ok(midi_in) = MidiInput::new("drumhid-list") {
            for port in midi_in.ports() {
                if let Ok(name) = midi_in.port_name(&port) {
                    devices.push(name);
                }
            }
        }

        devices
    }

    fn open(&mut self, device_name: &str, mailbox: Arc<MessageMailbox>) -> Result<()> {
        self.close();

        let midi_in = Self::input()?;
        let in_ports = midi_in.ports();
        debug!("Available MIDI input ports:");
        for port in &in_ports {
            if let Ok(port_name) = midi_in.port_name(port) {
                debug!("  - {}", port_name);
            }
        }

        let in_port = in_ports
            .iter()
            .find(|p| {
                midi_in
                    .port_name(p)
                    .unwrap_or_default()
                    .contains(device_name)
            })
            .ok_or_else(|| MidiError::DeviceNotFound(device_name.to_string()))?;
        let port_name = midi_in
            .port_name(in_port)
            .map_err(|e| MidiError::PortError(e.to_string()))?;

        info!("Connecting to MIDI input port: {}", port_name);
        let connection = midi_in
            .connect(
                in_port,
                "drumhid-input",
                move |stamp, bytes, assembler: &mut MessageAssembler| {
                    trace!("Received {:02X?} at {}", bytes, stamp);
                    assembler.feed_all(bytes, |msg| mailbox.publish(msg));
                },
                MessageAssembler::new(),
            )
            .map_err(|e| MidiError::ConnectionError(e.to_string()))?;

        info!("Successfully connected to MIDI input: {}", port_name);
        self.connection = Some(connection);
        Ok(())
    }

    fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close();
            info!("MIDI input connection closed");
        }
    }
}

impl Drop for MidirEngine {
    fn drop(&mut self) {
        self.close();
    }
}
