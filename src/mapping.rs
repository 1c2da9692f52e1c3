//! Fixed note-to-control table.
//!
//! The two special slots are kept opaque; which instrument they stand for is a
//! property of the kit, not of this table.

/// Addressable control a note can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Pad0,
    Pad1,
    Pad2,
    Pad3,
    SpecialA,
    SpecialB,
    Unmapped,
}

impl Slot {
    pub const PADS: [Slot; 4] = [Slot::Pad0, Slot::Pad1, Slot::Pad2, Slot::Pad3];

    /// Index 0..4 for pad slots.
    pub fn pad_index(self) -> Option<usize> {
        match self {
            Slot::Pad0 => Some(0),
            Slot::Pad1 => Some(1),
            Slot::Pad2 => Some(2),
            Slot::Pad3 => Some(3),
            _ => None,
        }
    }
}

/// Every mapped note, in table order.
pub const NOTE_MAP: [(u8, Slot); 6] = [
    (0x2C, Slot::SpecialA),
    (0x24, Slot::SpecialB),
    (0x26, Slot::Pad2),
    (0x30, Slot::Pad3),
    (0x2D, Slot::Pad0),
    (0x2B, Slot::Pad1),
];

/// Maps a note number onto its slot. Total over `u8`.
pub fn map_note(note: u8) -> Slot {
    match note {
        0x2C => Slot::SpecialA,
        0x24 => Slot::SpecialB,
        0x26 => Slot::Pad2,
        0x30 => Slot::Pad3,
        0x2D => Slot::Pad0,
        0x2B => Slot::Pad1,
        _ => Slot::Unmapped,
    }
}
