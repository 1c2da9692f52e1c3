use super::{ReportTransport, TransportError};
use crate::report::{hex_bytes, OUTPUT_REPORT_LEN, REPORT_LEN};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::info;
use std::io::Write;

/// Console stand-in for the USB endpoint.
///
/// Always ready. Prints a report only when it differs from the previous one,
/// and keeps a spinner with delivery counters on stderr.
pub struct MonitorTransport<W: Write> {
    out: W,
    last: Option<[u8; REPORT_LEN]>,
    delivered: u64,
    printed: u64,
    spinner: ProgressBar,
}

fn create_status_spinner(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_prefix("Reports");
    pb
}

impl MonitorTransport<std::io::Stdout> {
    pub fn stdout(quiet: bool) -> Self {
        Self::new(std::io::stdout(), quiet)
    }
}

impl<W: Write> MonitorTransport<W> {
    pub fn new(out: W, quiet: bool) -> Self {
        MonitorTransport {
            out,
            last: None,
            delivered: 0,
            printed: 0,
            spinner: create_status_spinner(quiet),
        }
    }

    pub fn delivered(&self) -> u64 {
        self.delivered
    }

    pub fn printed(&self) -> u64 {
        self.printed
    }

    pub fn into_inner(self) -> W {
        self.spinner.finish_and_clear();
        self.out
    }

    fn print_report(&mut self, report: &[u8; REPORT_LEN]) -> std::io::Result<()> {
        let hex = hex_bytes(report);
        let stamp = chrono::Local::now().format("%H:%M:%S%.3f");
        writeln!(self.out, "{} Report #{:04}: {}", stamp, self.printed, hex)?;
        writeln!(
            self.out,
            "  Buttons: 0x{:02X} 0x{:02X}, Hat: 0x{:02X}",
            report[0], report[1], report[2]
        )?;
        self.out.flush()
    }
}

impl<W: Write> ReportTransport for MonitorTransport<W> {
    fn is_input_ready(&self) -> bool {
        true
    }

    fn send_report(&mut self, report: &[u8; REPORT_LEN]) -> Result<(), TransportError> {
        self.delivered += 1;
        if self.last.as_ref() != Some(report) {
            self.printed += 1;
            self.print_report(report)?;
            self.last = Some(*report);
        }
        self.spinner.set_message(format!(
            "delivered {} / changed {}",
            self.delivered, self.printed
        ));
        self.spinner.tick();
        Ok(())
    }

    fn take_output_report(&mut self) -> Option<[u8; OUTPUT_REPORT_LEN]> {
        None
    }

    fn set_activity(&mut self, active: bool) {
        info!("Activity indicator {}", if active { "on" } else { "off" });
    }
}
