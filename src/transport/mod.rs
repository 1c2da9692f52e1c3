//! Outbound side: where finished reports go.
//!
//! On hardware this is the HID interrupt endpoint pair. Here it is a trait so
//! the event loop can drive a console monitor or a test double the same way.

mod mock;
mod monitor;

use crate::report::{OUTPUT_REPORT_LEN, REPORT_LEN};
use std::error::Error;
use std::fmt;

pub use mock::MockTransport;
pub use monitor::MonitorTransport;

/// Errors raised by a transport.
#[derive(Debug)]
pub enum TransportError {
    /// The host went away; the event loop stops.
    Disconnected,
    /// Writing the report failed.
    Io(String),
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Disconnected => write!(f, "transport disconnected"),
            TransportError::Io(msg) => write!(f, "transport I/O error: {}", msg),
        }
    }
}

impl Error for TransportError {}

impl From<std::io::Error> for TransportError {
    fn from(e: std::io::Error) -> Self {
        TransportError::Io(e.to_string())
    }
}

pub trait ReportTransport {
    /// True when the host is ready to take an input report.
    fn is_input_ready(&self) -> bool;

    /// Hands one input report to the host.
    fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), TransportError>;

    /// Returns an output report if the host sent one since the last call.
    fn take_output_report(&mut self) -> Option<[u8; OUTPUT_REPORT_LEN]>;

    /// Drives the activity indicator. Transports without one ignore it.
    fn set_activity(&mut self, _active: bool) {}
}
