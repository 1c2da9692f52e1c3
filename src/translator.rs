use crate::mapping::map_note;
use crate::midi::MidiMessage;
use crate::report_queue::{ReportQueue, REPORT_QUEUE_CAPACITY};
use crate::state::ControllerState;
use log::{debug, trace};

/// Message → slot → state → queued snapshot.
///
/// Every note message pushes exactly one snapshot; other kinds push nothing.
#[derive(Debug, Default)]
pub struct Translator<const N: usize = REPORT_QUEUE_CAPACITY> {
    state: ControllerState,
    queue: ReportQueue<N>,
    processed: u64,
}

impl<const N: usize> Translator<N> {
    pub fn new() -> Self {
        Translator {
            state: ControllerState::new(),
            queue: ReportQueue::new(),
            processed: 0,
        }
    }

    /// Returns true if a snapshot was queued.
    pub fn process(&mut self, msg: &MidiMessage) -> bool {
        if !msg.is_note() {
            trace!("Ignoring {:?} {:02X?}", msg.kind, msg.as_bytes());
            return false;
        }

        let slot = map_note(msg.note);
        self.state.echo(msg.raw());
        self.state.apply(msg.kind, slot, msg.velocity);
        self.queue.push(self.state.snapshot());
        self.processed += 1;
        debug!(
            "{:?} note={:#04X} vel={} -> {:?}, queued={}",
            msg.kind,
            msg.note,
            msg.velocity,
            slot,
            self.queue.len()
        );
        true
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn queue(&self) -> &ReportQueue<N> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut ReportQueue<N> {
        &mut self.queue
    }

    /// Note messages processed since creation.
    pub fn processed(&self) -> u64 {
        self.processed
    }
}
