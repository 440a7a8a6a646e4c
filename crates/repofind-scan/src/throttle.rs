//! Time gating for progress deliveries.

use std::time::{Duration, Instant};

/// Decide whether a pending batch should be flushed at `now`.
///
/// A zero interval flushes on every call. Otherwise a flush is due once at
/// least `min_interval` has passed since `last_flush`, or when nothing has
/// been flushed yet.
pub fn should_flush(now: Instant, last_flush: Option<Instant>, min_interval: Duration) -> bool {
    if min_interval.is_zero() {
        return true;
    }
    match last_flush {
        Some(last) => now.saturating_duration_since(last) >= min_interval,
        None => true,
    }
}

/// Throttle state owned by the scanning thread.
#[derive(Debug, Clone)]
pub struct Throttle {
    min_interval: Duration,
    last_flush: Option<Instant>,
}

impl Throttle {
    /// Create a throttle that has never flushed.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_flush: None,
        }
    }

    /// Check whether to flush at `now`, recording `now` as the last flush
    /// when it does.
    pub fn should_flush(&mut self, now: Instant) -> bool {
        if !should_flush(now, self.last_flush, self.min_interval) {
            return false;
        }
        self.last_flush = Some(now);
        true
    }

    /// The configured minimum interval.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// When the last flush happened.
    pub fn last_flush(&self) -> Option<Instant> {
        self.last_flush
    }
}
