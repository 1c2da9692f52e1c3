//! Input report layout and the idle report.
//!
//! Wire order: primary buttons, secondary buttons, hat, X, Y, Z, Rz,
//! 12 vendor bytes, 4 little-endian vendor words. 27 bytes total.

use crate::mapping::Slot;

pub const REPORT_LEN: usize = 27;
/// Size of the host-to-device report, which is read and discarded.
pub const OUTPUT_REPORT_LEN: usize = 8;

pub const USB_VENDOR_ID: u16 = 0x1BAD;
pub const USB_PRODUCT_ID: u16 = 0x3110;
/// Endpoint polling interval the descriptor advertises, in milliseconds.
pub const USB_POLL_INTERVAL_MS: u64 = 10;

pub const HAT_CENTERED: u8 = 0x08;
pub const AXIS_NEUTRAL: u8 = 0x7F;
pub const AUX16_CONSTANT: u16 = 0x0002;

/// Secondary-bitmask bit raised while any pad is held.
pub const ANY_PAD_FLAG: u8 = 0x04;

/// Vendor byte holding each pad's last velocity.
pub const PAD_VELOCITY_OFFSETS: [usize; 4] = [7, 6, 5, 4];
/// First vendor byte of the raw MIDI echo (3 bytes).
pub const ECHO_OFFSET: usize = 8;

/// Primary-bitmask bit for a slot, or 0.
pub fn primary_bit(slot: Slot) -> u8 {
    match slot.pad_index() {
        Some(index) => 1 << index,
        None => 0,
    }
}

/// Secondary-bitmask bit for a slot, or 0.
pub fn secondary_bit(slot: Slot) -> u8 {
    match slot {
        Slot::SpecialA => 0x10,
        Slot::SpecialB => 0x02,
        _ => 0,
    }
}

/// Space-separated uppercase hex, the way host tools print reports.
pub fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One complete controller snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HidReport {
    pub primary: u8,
    pub secondary: u8,
    pub hat: u8,
    pub axes: [u8; 4],
    pub aux8: [u8; 12],
    pub aux16: [u16; 4],
}

/// Neutral report: nothing pressed, hat centered, axes at midpoint.
pub const IDLE_REPORT: HidReport = HidReport {
    primary: 0,
    secondary: 0,
    hat: HAT_CENTERED,
    axes: [AXIS_NEUTRAL; 4],
    aux8: [0; 12],
    aux16: [AUX16_CONSTANT; 4],
};

impl Default for HidReport {
    fn default() -> Self {
        IDLE_REPORT
    }
}

impl HidReport {
    pub fn buttons(&self) -> u16 {
        u16::from_le_bytes([self.primary, self.secondary])
    }

    pub fn pad_velocity(&self, pad: usize) -> u8 {
        self.aux8[PAD_VELOCITY_OFFSETS[pad]]
    }

    pub fn echo(&self) -> [u8; 3] {
        [
            self.aux8[ECHO_OFFSET],
            self.aux8[ECHO_OFFSET + 1],
            self.aux8[ECHO_OFFSET + 2],
        ]
    }

    pub fn to_bytes(&self) -> [u8; REPORT_LEN] {
        let mut out = [0u8; REPORT_LEN];
        out[0] = self.primary;
        out[1] = self.secondary;
        out[2] = self.hat;
        out[3..7].copy_from_slice(&self.axes);
        out[7..19].copy_from_slice(&self.aux8);
        for (i, word) in self.aux16.iter().enumerate() {
            let at = 19 + i * 2;
            out[at..at + 2].copy_from_slice(&word.to_le_bytes());
        }
        out
    }

    pub fn to_hex(&self) -> String {
        hex_bytes(&self.to_bytes())
    }
}
