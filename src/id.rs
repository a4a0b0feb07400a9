//! Serial identifiers: a millisecond timestamp followed by a sequence number.
//!
//! `20240115102030456` + `007` → `20240115102030456007`.

use crate::constants::YYYYMMDDHHMMSSSSS;
use crate::error::{Error, Result};
use crate::expr::numeric::zero_pad;
use crate::expr::sequence::SequenceCounter;
use crate::expr::timestamp::DatePattern;
use crate::ports::clock::Clock;
use crate::ports::IdGenerator;

/// Sequence width used when the caller does not pick one.
pub const DEFAULT_ID_WIDTH: usize = 3;

/// Widest sequence suffix whose identifier still fits in a `u128`.
pub const MAX_NUMERIC_WIDTH: usize = 22;

/// Generates identifiers from a clock and a sequence counter.
///
/// Identifiers from one generator are distinct and sort in issue order as
/// long as the sequence stays within `width` digits.
pub struct SerialIdGenerator<'a> {
    clock: &'a dyn Clock,
    counter: &'a SequenceCounter,
    pattern: DatePattern,
}

impl<'a> SerialIdGenerator<'a> {
    /// Creates a generator bound to `clock` and `counter`.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, counter: &'a SequenceCounter) -> Self {
        Self { clock, counter, pattern: timestamp_pattern() }
    }

    /// Returns the next identifier with a `width`-digit sequence suffix.
    ///
    /// A sequence value wider than `width` is written in full.
    #[must_use]
    pub fn next_id_string(&self, width: usize) -> String {
        let stamp = self.pattern.format(&self.clock.now());
        let serial = zero_pad(self.counter.next_value(), width);
        format!("{stamp}{serial}")
    }

    /// Returns the next identifier as a number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NumericConversion`] when the digits do not fit in a
    /// `u128`, which happens for widths above [`MAX_NUMERIC_WIDTH`]. The
    /// sequence value is consumed either way.
    pub fn next_id(&self, width: usize) -> Result<u128> {
        let id = self.next_id_string(width);
        id.parse().map_err(|_| Error::NumericConversion { value: id })
    }
}

impl IdGenerator for SerialIdGenerator<'_> {
    fn generate_id(&self) -> String {
        self.next_id_string(DEFAULT_ID_WIDTH)
    }
}

fn timestamp_pattern() -> DatePattern {
    // The constant only uses supported letters.
    DatePattern::parse(YYYYMMDDHHMMSSSSS).unwrap_or_else(|e| unreachable!("{e}"))
}
