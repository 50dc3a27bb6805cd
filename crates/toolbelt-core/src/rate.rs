// Rust guideline compliant 2026-10-16

//! Throughput accounting for progress reporters.

use crate::{Error, Result};
use std::time::{Duration, Instant};

/// Smallest elapsed time used as a divisor when computing rates.
const MIN_ELAPSED: Duration = Duration::from_millis(1);

/// Rates computed when the count lands on an interval boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateSample {
    /// Count at the time of the sample.
    pub count: u64,
    /// Items per second since the tracker started.
    pub total_rate: f64,
    /// Items per second over the interval that just completed.
    pub interval_rate: f64,
}

/// Final totals for a finished unit of work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// Total items counted.
    pub count: u64,
    /// Wall-clock time since the tracker started.
    pub elapsed: Duration,
    /// Items per second over the whole run.
    pub rate: f64,
}

/// Accumulates a count and derives cumulative and per-interval rates.
#[derive(Debug, Clone)]
pub struct RateTracker {
    count: u64,
    start: Instant,
    interval_start: Instant,
    update_interval: u64,
}

impl RateTracker {
    /// Creates a tracker starting now.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `update_interval` is zero.
    pub fn new(update_interval: u64) -> Result<Self> {
        Self::starting_at(update_interval, Instant::now())
    }

    /// Creates a tracker whose clock starts at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInterval`] if `update_interval` is zero.
    pub fn starting_at(update_interval: u64, start: Instant) -> Result<Self> {
        if update_interval == 0 {
            return Err(Error::InvalidInterval);
        }
        Ok(Self {
            count: 0,
            start,
            interval_start: start,
            update_interval,
        })
    }

    /// Current count.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Configured update interval.
    pub fn update_interval(&self) -> u64 {
        self.update_interval
    }

    /// Adds `n` to the count.
    ///
    /// Returns a sample only when the count moves onto an exact multiple of
    /// the update interval.
    pub fn advance(&mut self, n: u64) -> Option<RateSample> {
        self.advance_at(n, Instant::now())
    }

    /// Same as [`RateTracker::advance`] with an explicit clock reading.
    pub fn advance_at(&mut self, n: u64, now: Instant) -> Option<RateSample> {
        if n == 0 {
            return None;
        }
        self.count = self.count.saturating_add(n);
        if self.count % self.update_interval != 0 {
            return None;
        }

        let sample = RateSample {
            count: self.count,
            total_rate: per_second(self.count, now.saturating_duration_since(self.start)),
            interval_rate: per_second(
                self.update_interval,
                now.saturating_duration_since(self.interval_start),
            ),
        };
        self.interval_start = now;
        Some(sample)
    }

    /// Reports total elapsed time and the cumulative rate.
    pub fn finalize(&self) -> Summary {
        self.finalize_at(Instant::now())
    }

    /// Same as [`RateTracker::finalize`] with an explicit clock reading.
    pub fn finalize_at(&self, now: Instant) -> Summary {
        let elapsed = now.saturating_duration_since(self.start);
        Summary {
            count: self.count,
            elapsed,
            rate: per_second(self.count, elapsed),
        }
    }
}

fn per_second(count: u64, elapsed: Duration) -> f64 {
    count as f64 / elapsed.max(MIN_ELAPSED).as_secs_f64()
}
