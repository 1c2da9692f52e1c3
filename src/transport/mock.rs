use super::{ReportTransport, TransportError};
use crate::report::{OUTPUT_REPORT_LEN, REPORT_LEN};
use std::collections::VecDeque;

/// Records every report it is given.
#[derive(Debug)]
pub struct MockTransport {
    pub sent: Vec<[u8; REPORT_LEN]>,
    pub activity: Vec<bool>,
    ready: bool,
    pending_output: VecDeque<[u8; OUTPUT_REPORT_LEN]>,
    fail_after: Option<usize>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        MockTransport {
            sent: Vec::new(),
            activity: Vec::new(),
            ready: true,
            pending_output: VecDeque::new(),
            fail_after: None,
        }
    }

    pub fn set_ready(&mut self, ready: bool) {
        self.ready = ready;
    }

    /// Queues an output report as if the host had sent it.
    pub fn inject_output(&mut self, report: [u8; OUTPUT_REPORT_LEN]) {
        self.pending_output.push_back(report);
    }

    pub fn pending_output(&self) -> usize {
        self.pending_output.len()
    }

    /// Report `Disconnected` once `count` reports have been sent.
    pub fn disconnect_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }
}

impl ReportTransport for MockTransport {
    fn is_input_ready(&self) -> bool {
        self.ready
    }

    fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), TransportError> {
        if self.fail_after.is_some_and(|n| self.sent.len() >= n) {
            return Err(TransportError::Disconnected);
        }
        self.sent.push(*report);
        Ok(())
    }

    fn take_output_report(&mut self) -> Option<[u8; OUTPUT_REPORT_LEN]> {
        self.pending_output.pop_front()
    }

    fn set_activity(&mut self, active: bool) {
        self.activity.push(active);
    }
}
