//! Paginator statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics tracked by a [`Paginator`](crate::Paginator).
///
/// All fields are atomic, so a paginator shared across threads can count
/// without locks. `Ordering::Relaxed` throughout: counters are independent
/// and only need atomicity.
///
/// # Example
/// ```
/// use pagekit::PaginatorStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = PaginatorStats::new();
/// stats.pages_served.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.pages_served.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct PaginatorStats {
    /// Paged results returned.
    pub pages_served: AtomicU64,

    /// Records returned across all results, paged or not.
    pub records_returned: AtomicU64,

    /// Requests whose page index had to be clamped into range.
    pub clamped_requests: AtomicU64,

    /// Pass-through calls made without a request.
    pub unpaged_requests: AtomicU64,
}

impl PaginatorStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            pages_served: AtomicU64::new(0),
            records_returned: AtomicU64::new(0),
            clamped_requests: AtomicU64::new(0),
            unpaged_requests: AtomicU64::new(0),
        }
    }

    pub(crate) fn record_page(&self, records: usize, clamped: bool) {
        self.pages_served.fetch_add(1, Ordering::Relaxed);
        self.records_returned.fetch_add(records as u64, Ordering::Relaxed);
        if clamped {
            self.clamped_requests.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_unpaged(&self, records: usize) {
        self.unpaged_requests.fetch_add(1, Ordering::Relaxed);
        self.records_returned.fetch_add(records as u64, Ordering::Relaxed);
    }

    /// Get a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            pages_served: self.pages_served.load(Ordering::Relaxed),
            records_returned: self.records_returned.load(Ordering::Relaxed),
            clamped_requests: self.clamped_requests.load(Ordering::Relaxed),
            unpaged_requests: self.unpaged_requests.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.pages_served.store(0, Ordering::Relaxed);
        self.records_returned.store(0, Ordering::Relaxed);
        self.clamped_requests.store(0, Ordering::Relaxed);
        self.unpaged_requests.store(0, Ordering::Relaxed);
    }
}

impl Default for PaginatorStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time snapshot of paginator statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub pages_served: u64,
    pub records_returned: u64,
    pub clamped_requests: u64,
    pub unpaged_requests: u64,
}

impl StatsSnapshot {
    /// Average records per result, paged or not (0.0 when nothing was served).
    pub fn avg_records_per_result(&self) -> f64 {
        let results = self.pages_served + self.unpaged_requests;
        if results == 0 {
            0.0
        } else {
            self.records_returned as f64 / results as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ pages: {}, records: {}, clamped: {}, unpaged: {} }}",
            self.pages_served, self.records_returned, self.clamped_requests, self.unpaged_requests
        )
    }
}
