// event_loop.rs

use crate::delivery::DeliveryDriver;
use crate::handoff::MessageMailbox;
use crate::transport::{ReportTransport, TransportError};
use crate::translator::Translator;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Cloneable handle that asks a running loop to return.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Counters from one `run_once` pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassStats {
    pub messages: usize,
    pub queued: usize,
    pub sent: bool,
}

/// Main polling loop: drains the mailbox, updates state, services the transport.
///
/// Nothing here blocks on input; an idle pass just delivers the idle report.
pub struct EventLoop<T: ReportTransport> {
    mailbox: Arc<MessageMailbox>,
    translator: Translator,
    driver: DeliveryDriver,
    transport: T,
    poll_interval: Duration,
    stop: StopHandle,
    activity: bool,
}

impl<T: ReportTransport> EventLoop<T> {
    pub fn new(mailbox: Arc<MessageMailbox>, transport: T, poll_interval: Duration) -> Self {
        EventLoop {
            mailbox,
            translator: Translator::new(),
            driver: DeliveryDriver::new(),
            transport,
            poll_interval,
            stop: StopHandle::new(),
            activity: false,
        }
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// One pass of the loop.
    pub fn run_once(&mut self) -> Result<PassStats, TransportError> {
        let mut stats = PassStats::default();

        while let Some(msg) = self.mailbox.take() {
            stats.messages += 1;
            if self.translator.process(&msg) {
                stats.queued += 1;
            }
        }

        let active = self.translator.state().activity();
        if active != self.activity {
            self.activity = active;
            self.transport.set_activity(active);
        }

        stats.sent = self
            .driver
            .service(&mut self.transport, self.translator.queue_mut())?;
        Ok(stats)
    }

    /// Runs passes every `poll_interval` until stopped or the transport fails.
    pub fn run(&mut self) -> Result<(), TransportError> {
        info!(
            "Event loop running, poll interval {:?}",
            self.poll_interval
        );

        while !self.stop.is_stopped() {
            let pass_start = Instant::now();

            match self.run_once() {
                Ok(stats) if stats.messages > 0 => debug!("Pass: {:?}", stats),
                Ok(_) => {}
                Err(e) => {
                    error!("Transport error, stopping event loop: {}", e);
                    return Err(e);
                }
            }

            let elapsed = pass_start.elapsed();
            if elapsed < self.poll_interval {
                thread::sleep(self.poll_interval - elapsed);
            }
        }

        info!(
            "Event loop stopped: {} reports delivered, {} idle, {} mailbox drops, {} queue overwrites",
            self.driver.delivered(),
            self.driver.idle_fallbacks(),
            self.mailbox.dropped(),
            self.translator.queue().overwritten()
        );
        Ok(())
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn driver(&self) -> &DeliveryDriver {
        &self.driver
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }
}
