//! Per-level delivery counters
//!
//! A record that every appender accepted is counted under its own level, so
//! RAW lines (banner bars included) and SUCCESS lines are tallied apart from
//! INFO. A record that at least one appender failed to write counts as
//! dropped instead. Records sent to a logger with no appenders count as
//! neither.

use super::log_level::LogLevel;
use std::sync::atomic::{AtomicU64, Ordering};

const LEVEL_SLOTS: usize = u8::MAX as usize + 1;

/// Delivery counters for one logger
///
/// # Example
///
/// ```
/// use pretty_logger::{LogLevel, LoggerMetrics};
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_logged(LogLevel::RAW);
/// metrics.record_logged(LogLevel::SUCCESS);
/// metrics.record_logged(LogLevel::RAW);
///
/// assert_eq!(metrics.logged(LogLevel::RAW), 2);
/// assert_eq!(metrics.total_logged(), 3);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Indexed by level number
    logged: [AtomicU64; LEVEL_SLOTS],
    dropped_count: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            logged: [const { AtomicU64::new(0) }; LEVEL_SLOTS],
            dropped_count: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn record_logged(&self, level: LogLevel) {
        self.logged[usize::from(level.value())].fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_dropped(&self) {
        self.dropped_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Records delivered at exactly `level`
    #[inline]
    pub fn logged(&self, level: LogLevel) -> u64 {
        self.logged[usize::from(level.value())].load(Ordering::Relaxed)
    }

    /// Records delivered at any level
    pub fn total_logged(&self) -> u64 {
        self.logged
            .iter()
            .map(|count| count.load(Ordering::Relaxed))
            .sum()
    }

    /// Non-zero per-level counts, ascending by level
    pub fn by_level(&self) -> Vec<(LogLevel, u64)> {
        self.logged
            .iter()
            .enumerate()
            .filter_map(|(idx, count)| {
                let count = count.load(Ordering::Relaxed);
                let level = LogLevel::new(u8::try_from(idx).ok()?);
                (count > 0).then_some((level, count))
            })
            .collect()
    }

    #[inline]
    pub fn dropped_count(&self) -> u64 {
        self.dropped_count.load(Ordering::Relaxed)
    }

    /// Dropped records as a percentage of all dispatched records
    ///
    /// Returns 0.0 if nothing has been dispatched.
    pub fn drop_rate(&self) -> f64 {
        let dropped = self.dropped_count() as f64;
        let total = self.total_logged() as f64 + dropped;
        if total == 0.0 {
            0.0
        } else {
            (dropped / total) * 100.0
        }
    }

    pub fn reset(&self) {
        for count in &self.logged {
            count.store(0, Ordering::Relaxed);
        }
        self.dropped_count.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// A snapshot of the current counts
    fn clone(&self) -> Self {
        let snapshot = Self::new();
        for (slot, count) in snapshot.logged.iter().zip(&self.logged) {
            slot.store(count.load(Ordering::Relaxed), Ordering::Relaxed);
        }
        snapshot
            .dropped_count
            .store(self.dropped_count(), Ordering::Relaxed);
        snapshot
    }
}
