/// Status nibble for Note Off.
pub const NOTE_OFF: u8 = 0x80;
/// Status nibble for Note On.
pub const NOTE_ON: u8 = 0x90;
/// Status nibble for Control Change.
pub const CONTROL_CHANGE: u8 = 0xB0;
/// Status nibble for Program Change.
pub const PROGRAM_CHANGE: u8 = 0xC0;
/// Status nibble for Channel Pressure.
pub const CHANNEL_PRESSURE: u8 = 0xD0;

/// Longest message the assembler ever builds.
pub const MAX_MESSAGE_LEN: usize = 3;

/// Returns true when `byte` starts a new message.
pub fn is_status(byte: u8) -> bool {
    byte & 0x80 != 0
}

/// Number of bytes (status included) a message starting with `status` carries.
pub fn expected_len(status: u8) -> usize {
    match status & 0xF0 {
        PROGRAM_CHANGE | CHANNEL_PRESSURE => 2,
        _ => 3,
    }
}

/// What a completed message means to the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    NoteOn,
    NoteOff,
    ControlChange,
    Other,
}

impl MessageKind {
    fn from_status(status: u8) -> Self {
        match status & 0xF0 {
            NOTE_ON => MessageKind::NoteOn,
            NOTE_OFF => MessageKind::NoteOff,
            CONTROL_CHANGE => MessageKind::ControlChange,
            _ => MessageKind::Other,
        }
    }
}

/// A complete 2 or 3 byte channel message.
///
/// Built by [`MessageAssembler`](super::MessageAssembler) and handed across the
/// input/main-loop boundary by value, so the status and data bytes always
/// travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MidiMessage {
    pub kind: MessageKind,
    pub channel: u8,
    pub note: u8,
    pub velocity: u8,
    raw: [u8; MAX_MESSAGE_LEN],
    len: u8,
}

impl MidiMessage {
    /// Builds a message from the first `len` bytes of `raw`.
    ///
    /// Bytes past `len` are zeroed. For 2-byte messages `velocity` is 0.
    pub fn from_raw(raw: [u8; MAX_MESSAGE_LEN], len: usize) -> Self {
        let len = len.clamp(1, MAX_MESSAGE_LEN);
        let mut bytes = [0u8; MAX_MESSAGE_LEN];
        bytes[..len].copy_from_slice(&raw[..len]);

        let status = bytes[0];
        MidiMessage {
            kind: MessageKind::from_status(status),
            channel: status & 0x0F,
            note: bytes[1],
            velocity: bytes[2],
            raw: bytes,
            len: len as u8,
        }
    }

    pub fn note_on(channel: u8, note: u8, velocity: u8) -> Self {
        Self::from_raw([NOTE_ON | (channel & 0x0F), note, velocity], 3)
    }

    pub fn note_off(channel: u8, note: u8, velocity: u8) -> Self {
        Self::from_raw([NOTE_OFF | (channel & 0x0F), note, velocity], 3)
    }

    pub fn status(&self) -> u8 {
        self.raw[0]
    }

    /// The bytes as received.
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw[..self.len as usize]
    }

    /// Fixed-width view used for the diagnostic echo; unused tail bytes are 0.
    pub fn raw(&self) -> [u8; MAX_MESSAGE_LEN] {
        self.raw
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True for messages that drive controller state.
    pub fn is_note(&self) -> bool {
        matches!(self.kind, MessageKind::NoteOn | MessageKind::NoteOff)
    }
}
