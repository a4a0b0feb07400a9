//! Atomic sequence counter backing `serialNumber` tokens and serial IDs.

use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free, monotonically increasing counter.
///
/// Every call to [`next_value`](Self::next_value) returns a distinct value,
/// even when the counter is shared between threads. Values wrap at
/// `u64::MAX`.
#[derive(Debug, Default)]
pub struct SequenceCounter {
    value: AtomicU64,
}

impl SequenceCounter {
    /// Creates a counter whose first value is 0.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a counter whose first value is `start`.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self { value: AtomicU64::new(start) }
    }

    /// Returns the current value and advances the counter by one.
    pub fn next_value(&self) -> u64 {
        self.value.fetch_add(1, Ordering::SeqCst)
    }

    /// Returns the value the next call to `next_value` will hand out.
    #[must_use]
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::SeqCst)
    }
}
