use crate::mapping::Slot;
use crate::midi::{MessageKind, MAX_MESSAGE_LEN};
use crate::report::{
    primary_bit, secondary_bit, HidReport, ANY_PAD_FLAG, ECHO_OFFSET, IDLE_REPORT,
    PAD_VELOCITY_OFFSETS,
};
use log::trace;

/// The report being edited between messages.
///
/// Only button bitmasks, pad velocities and the raw echo ever change; hat,
/// axes and the vendor words keep their idle values.
#[derive(Debug, Clone)]
pub struct ControllerState {
    report: HidReport,
    activity: bool,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            report: IDLE_REPORT,
            activity: false,
        }
    }
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a note event to the current report.
    ///
    /// Returns false for message kinds that do not drive the report; those
    /// leave the state untouched.
    pub fn apply(&mut self, kind: MessageKind, slot: Slot, velocity: u8) -> bool {
        match kind {
            MessageKind::NoteOn if velocity > 0 => self.press(slot, velocity),
            // Note on with velocity 0 is a release.
            MessageKind::NoteOn | MessageKind::NoteOff => self.release(slot),
            MessageKind::ControlChange | MessageKind::Other => return false,
        }
        trace!(
            "{:?} {:?} vel={} -> buttons={:04X}",
            kind,
            slot,
            velocity,
            self.report.buttons()
        );
        true
    }

    fn press(&mut self, slot: Slot, velocity: u8) {
        if let Some(pad) = slot.pad_index() {
            self.report.primary |= primary_bit(slot);
            self.report.secondary |= ANY_PAD_FLAG;
            self.report.aux8[PAD_VELOCITY_OFFSETS[pad]] = velocity;
            self.activity = true;
        } else {
            self.report.secondary |= secondary_bit(slot);
        }
    }

    fn release(&mut self, slot: Slot) {
        if let Some(pad) = slot.pad_index() {
            self.report.primary &= !primary_bit(slot);
            self.report.aux8[PAD_VELOCITY_OFFSETS[pad]] = 0;
            if self.report.primary == 0 {
                self.report.secondary &= !ANY_PAD_FLAG;
            }
            self.activity = false;
        } else {
            self.report.secondary &= !secondary_bit(slot);
        }
    }

    /// Copies the triggering message's raw bytes into the diagnostic echo.
    pub fn echo(&mut self, raw: [u8; MAX_MESSAGE_LEN]) {
        self.report.aux8[ECHO_OFFSET..ECHO_OFFSET + MAX_MESSAGE_LEN].copy_from_slice(&raw);
    }

    /// Copy of the current report, ready to queue.
    pub fn snapshot(&self) -> HidReport {
        self.report
    }

    /// Visual activity indicator: lit by a pad strike, cleared by a pad release.
    pub fn activity(&self) -> bool {
        self.activity
    }
}
