//! Stale-response guard for polled fetches.
//!
//! Each fetch takes a ticket when it is issued. Only the most recently issued
//! ticket may apply its result, and closing the guard on teardown rejects
//! every ticket, including ones still in flight.

#[cfg(test)]
#[path = "request_guard_test.rs"]
mod request_guard_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Identity of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Clone, Debug)]
pub struct RequestGuard {
    latest: Arc<AtomicU64>,
    open: Arc<AtomicBool>,
}

impl Default for RequestGuard {
    fn default() -> Self {
        Self { latest: Arc::new(AtomicU64::new(0)), open: Arc::new(AtomicBool::new(true)) }
    }
}

impl RequestGuard {
    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Whether a response for `ticket` may still be applied.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.open.load(Ordering::Relaxed) && self.latest.load(Ordering::Relaxed) == ticket.0
    }

    /// Reject all outstanding and future tickets.
    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }
}
