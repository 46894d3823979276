//! Autosave scheduling on caller-supplied logical time.
//!
//! # Responsibility
//! - Decide which periodic autosave ticks are due at a given instant.
//! - Provide wall-clock and manually driven time sources.
//!
//! # Invariants
//! - Ticks fire at `started_at + k * interval_ms` for `k >= 1`.
//! - Missed periods coalesce into one tick at the latest elapsed slot.
//! - A stopped timer never reports due ticks.
//! - A slot past `i64::MAX` is never scheduled.
//! - The timer never reads the wall clock itself.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

/// Default autosave period.
pub const DEFAULT_AUTOSAVE_INTERVAL_MS: i64 = 5_000;

/// Source of epoch-millisecond timestamps.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or(0)
    }
}

/// Clock advanced explicitly by tests and scripted front ends.
#[derive(Debug, Default)]
pub struct ManualClock {
    now_ms: Cell<i64>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now_ms: Cell::new(start_ms),
        }
    }

    /// Moves time forward by `delta_ms` and returns the new instant.
    pub fn advance(&self, delta_ms: i64) -> i64 {
        let next = self.now_ms.get().saturating_add(delta_ms.max(0));
        self.now_ms.set(next);
        next
    }

    pub fn set(&self, now_ms: i64) {
        self.now_ms.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now_ms.get()
    }
}

/// Cancellable fixed-period timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutosaveTimer {
    interval_ms: i64,
    next_due: Option<i64>,
}

impl AutosaveTimer {
    /// Creates a stopped timer. Non-positive intervals fall back to the default.
    pub fn new(interval_ms: i64) -> Self {
        let interval_ms = if interval_ms > 0 {
            interval_ms
        } else {
            DEFAULT_AUTOSAVE_INTERVAL_MS
        };
        Self {
            interval_ms,
            next_due: None,
        }
    }

    /// (Re)starts the period at `now_ms`.
    ///
    /// The timer stays stopped when the first slot is not representable.
    pub fn start(&mut self, now_ms: i64) {
        self.next_due = now_ms.checked_add(self.interval_ms);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval_ms(&self) -> i64 {
        self.interval_ms
    }

    pub fn next_due(&self) -> Option<i64> {
        self.next_due
    }

    /// Returns the latest slot due at or before `now_ms`, if any.
    ///
    /// Any number of missed periods yield one tick; the next slot is the
    /// first one after `now_ms`.
    pub fn poll(&mut self, now_ms: i64) -> Option<i64> {
        let due = self.next_due?;
        if due > now_ms {
            return None;
        }
        let elapsed = (i128::from(now_ms) - i128::from(due)) / i128::from(self.interval_ms);
        // due <= latest <= now_ms, so the narrowing cannot overflow.
        let latest = (i128::from(due) + elapsed * i128::from(self.interval_ms)) as i64;
        self.next_due = latest.checked_add(self.interval_ms);
        Some(latest)
    }
}

impl Default for AutosaveTimer {
    fn default() -> Self {
        Self::new(DEFAULT_AUTOSAVE_INTERVAL_MS)
    }
}
