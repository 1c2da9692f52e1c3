//! Fixed-capacity ring of report snapshots with drop-oldest overflow.

use crate::report::{HidReport, IDLE_REPORT};
use log::debug;

pub const REPORT_QUEUE_CAPACITY: usize = 8;

/// Ring buffer of snapshots between the translator and delivery.
///
/// `push` never fails: when full it overwrites the oldest unread snapshot.
/// Storage is a fixed array; nothing allocates after construction.
#[derive(Debug, Clone)]
pub struct ReportQueue<const N: usize = REPORT_QUEUE_CAPACITY> {
    slots: [HidReport; N],
    head: usize,
    tail: usize,
    full: bool,
    overwritten: u64,
}

impl<const N: usize> Default for ReportQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ReportQueue<N> {
    const NON_EMPTY: () = assert!(N > 0, "ReportQueue capacity must be non-zero");

    pub fn new() -> Self {
        let _ = Self::NON_EMPTY;
        ReportQueue {
            slots: [IDLE_REPORT; N],
            head: 0,
            tail: 0,
            full: false,
            overwritten: 0,
        }
    }

    pub fn push(&mut self, report: HidReport) {
        self.slots[self.head] = report;
        if self.full {
            self.tail = (self.tail + 1) % N;
            self.overwritten += 1;
            debug!("Report queue full, oldest snapshot overwritten");
        }
        self.head = (self.head + 1) % N;
        self.full = self.head == self.tail;
    }

    /// Removes and returns the oldest snapshot.
    pub fn pop(&mut self) -> Option<HidReport> {
        if self.is_empty() {
            return None;
        }
        let report = self.slots[self.tail];
        self.tail = (self.tail + 1) % N;
        self.full = false;
        Some(report)
    }

    pub fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    pub fn is_full(&self) -> bool {
        self.full
    }

    pub fn len(&self) -> usize {
        if self.full {
            N
        } else {
            (self.head + N - self.tail) % N
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Snapshots discarded by overflow since creation.
    pub fn overwritten(&self) -> u64 {
        self.overwritten
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(tag: u8) -> HidReport {
        let mut report = IDLE_REPORT;
        report.aux8[0] = tag;
        report
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: ReportQueue<4> = ReportQueue::new();
        queue.push(tagged(1));
        queue.push(tagged(2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop().map(|r| r.aux8[0]), Some(1));
        assert_eq!(queue.pop().map(|r| r.aux8[0]), Some(2));
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_full_flag_tracks_wrap() {
        let mut queue: ReportQueue<2> = ReportQueue::new();
        queue.push(tagged(1));
        assert!(!queue.is_full());
        queue.push(tagged(2));
        assert!(queue.is_full());
        assert_eq!(queue.len(), 2);
        queue.pop();
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_overflow_keeps_newest() {
        let mut queue: ReportQueue<3> = ReportQueue::new();
        for tag in 1..=5 {
            queue.push(tagged(tag));
        }
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.overwritten(), 2);
        let tags: Vec<u8> = std::iter::from_fn(|| queue.pop()).map(|r| r.aux8[0]).collect();
        assert_eq!(tags, vec![3, 4, 5]);
    }
}
