//! Shared run counters and progress reporting thresholds.
//!
//! The counters are the only state shared across worker tasks. Increments
//! are commutative, so relaxed atomics are enough; totals read after the
//! pool joins are exact. Counters only ever increase during a run and are
//! rebuilt for the next one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Scanned/deleted totals for one sweep run.
#[derive(Debug, Default)]
pub struct RunCounters {
    scanned: AtomicU64,
    deleted: AtomicU64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one scanned entry and returns the updated total.
    pub fn record_scanned(&self) -> u64 {
        self.scanned.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Records one deletion and returns the updated total.
    pub fn record_deleted(&self) -> u64 {
        self.deleted.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn scanned(&self) -> u64 {
        self.scanned.load(Ordering::Relaxed)
    }

    pub fn deleted(&self) -> u64 {
        self.deleted.load(Ordering::Relaxed)
    }
}

/// Whether a progress line is due after processing an entry.
///
/// Conditions are checked in order, first match wins: pending-stack size at
/// a nonzero multiple of 100, scanned total at a nonzero multiple of 1000,
/// deleted total at a nonzero multiple of 100.
pub fn progress_due(pending: usize, scanned: u64, deleted: u64) -> bool {
    if pending != 0 && pending % 100 == 0 {
        return true;
    }
    if scanned != 0 && scanned % 1000 == 0 {
        return true;
    }
    deleted != 0 && deleted % 100 == 0
}
