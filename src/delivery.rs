use crate::report::{HidReport, IDLE_REPORT};
use crate::report_queue::ReportQueue;
use crate::transport::{ReportTransport, TransportError};
use log::{debug, trace};

/// Hands one report to the transport per delivery opportunity.
///
/// Pops the oldest queued snapshot, or falls back to the idle report so the
/// host always receives something valid.
#[derive(Debug)]
pub struct DeliveryDriver {
    idle: HidReport,
    delivered: u64,
    idle_fallbacks: u64,
    discarded_outputs: u64,
}

impl Default for DeliveryDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliveryDriver {
    pub fn new() -> Self {
        DeliveryDriver {
            idle: IDLE_REPORT,
            delivered: 0,
            idle_fallbacks: 0,
            discarded_outputs: 0,
        }
    }

    pub fn idle_report(&self) -> &HidReport {
        &self.idle
    }

    /// Next report to deliver: queued snapshot or idle.
    pub fn next_report<const N: usize>(&mut self, queue: &mut ReportQueue<N>) -> HidReport {
        match queue.pop() {
            Some(report) => report,
            None => {
                self.idle_fallbacks += 1;
                self.idle
            }
        }
    }

    /// One pass over the endpoint pair.
    ///
    /// Any output report is read and discarded first, then one input report
    /// is sent if the host is ready. Returns true when a report was sent.
    pub fn service<T, const N: usize>(
        &mut self,
        transport: &mut T,
        queue: &mut ReportQueue<N>,
    ) -> Result<bool, TransportError>
    where
        T: ReportTransport + ?Sized,
    {
        if let Some(output) = transport.take_output_report() {
            self.discarded_outputs += 1;
            debug!("Discarding output report {:02X?}", output);
        }

        if !transport.is_input_ready() {
            return Ok(false);
        }

        let report = self.next_report(queue);
        trace!("Delivering report {}", report.to_hex());
        transport.send_report(&report.to_bytes())?;
        self.delivered += 1;
        Ok(true)
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn idle_fallbacks(&self) -> u64 {
        self.idle_fallbacks
    }

    pub fn discarded_outputs(&self) -> u64 {
        self.discarded_outputs
    }
}
