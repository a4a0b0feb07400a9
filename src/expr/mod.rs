//! Value expressions: `${key}` and `${directive->argument}` template expansion.
//!
//! A template is scanned for `${...}` tokens left to right. Each occurrence
//! is resolved on its own:
//!
//! - `${currentTimestamp->yyyyMMdd}` renders the current time,
//! - `${serialNumber->%05d}` renders the next sequence value,
//! - `${name}` is replaced by the caller parameter `name`, or left as-is when
//!   no such parameter exists.
//!
//! Substitution is positional, so two identical `${serialNumber->%03d}`
//! tokens render two consecutive values.
//!
//! ```
//! use commons_lang::adapters::fixed::FixedClock;
//! use commons_lang::expr::{Expander, SequenceCounter};
//! use commons_lang::maps;
//!
//! let clock = FixedClock::parse("2024-01-15T10:00:00").unwrap();
//! let counter = SequenceCounter::new();
//! let params = maps::of([("file".to_string(), "abc.txt".to_string())]);
//!
//! let out = Expander::new(&clock, &counter)
//!     .expand("trade.${file}.${currentTimestamp->yyyyMMdd}${serialNumber->%02d}", &params)
//!     .unwrap();
//! assert_eq!(out, "trade.abc.txt.2024011500");
//! ```

pub mod numeric;
pub mod resolver;
pub mod scanner;
pub mod sequence;
pub mod timestamp;

use std::collections::HashMap;

pub use resolver::{Key, KeyResolver};
pub use scanner::{scan, Token, Tokens};
pub use sequence::SequenceCounter;

use crate::adapters::live::clock::LiveClock;
use crate::error::Result;
use crate::ports::clock::Clock;

/// Expands templates against a clock and a default sequence counter.
pub struct Expander<'a> {
    clock: &'a dyn Clock,
    counter: &'a SequenceCounter,
}

impl<'a> Expander<'a> {
    /// Creates an expander bound to `clock` and `counter`.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, counter: &'a SequenceCounter) -> Self {
        Self { clock, counter }
    }

    /// Expands `template` using the bound counter.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed directive or invalid format; no partial
    /// output is returned.
    pub fn expand(&self, template: &str, params: &HashMap<String, String>) -> Result<String> {
        self.expand_with_counter(template, params, self.counter)
    }

    /// Expands `template` drawing serial numbers from `counter` instead of
    /// the bound one.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed directive or invalid format.
    pub fn expand_with_counter(
        &self,
        template: &str,
        params: &HashMap<String, String>,
        counter: &SequenceCounter,
    ) -> Result<String> {
        let resolver = KeyResolver::new(params, counter, self.clock);
        let mut out = String::with_capacity(template.len());
        let mut last = 0;
        for token in scan(template) {
            out.push_str(&template[last..token.start]);
            match resolver.resolve(token.body)? {
                Some(value) => out.push_str(&value),
                None => out.push_str(token.text),
            }
            last = token.end;
        }
        out.push_str(&template[last..]);
        Ok(out)
    }
}

/// Expands `template` against the system clock, drawing serial numbers from
/// `counter`.
///
/// # Errors
///
/// Fails on the first malformed directive or invalid format.
pub fn expand(
    template: &str,
    params: &HashMap<String, String>,
    counter: &SequenceCounter,
) -> Result<String> {
    Expander::new(&LiveClock, counter).expand(template, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::fixed::FixedClock;
    use crate::error::Error;
    use crate::maps;
    use chrono::Local;

    fn pinned() -> FixedClock {
        FixedClock::parse("2024-01-15T10:20:30.456").unwrap()
    }

    fn no_params() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn template_without_tokens_is_unchanged() {
        let counter = SequenceCounter::new();
        for t in ["", "plain", "cost: $5 {each}", "${unclosed"] {
            assert_eq!(expand(t, &no_params(), &counter).unwrap(), t);
        }
        assert_eq!(counter.current(), 0);
    }

    #[test]
    fn unresolvable_parameters_are_left_in_place() {
        let counter = SequenceCounter::new();
        let t = "a ${x} b ${y.z} ${}";
        assert_eq!(expand(t, &no_params(), &counter).unwrap(), t);
    }

    #[test]
    fn current_date_matches_the_system_clock() {
        let counter = SequenceCounter::new();
        let before = Local::now().format("%Y%m%d").to_string();
        let out = expand("${currentTimestamp->yyyyMMdd}", &no_params(), &counter).unwrap();
        let after = Local::now().format("%Y%m%d").to_string();
        assert!(out == before || out == after, "{out} not in [{before}, {after}]");
    }

    #[test]
    fn serial_numbers_follow_scan_order() {
        let counter = SequenceCounter::new();
        let out = expand("${serialNumber->%03d}-${serialNumber->%03d}", &no_params(), &counter)
            .unwrap();
        assert_eq!(out, "000-001");
    }

    #[test]
    fn fresh_counters_are_isolated() {
        let template = "${serialNumber->%03d}";
        let clock = pinned();
        let default = SequenceCounter::starting_at(500);
        let expander = Expander::new(&clock, &default);

        let first = SequenceCounter::new();
        let second = SequenceCounter::new();
        assert_eq!(expander.expand_with_counter(template, &no_params(), &first).unwrap(), "000");
        assert_eq!(expander.expand_with_counter(template, &no_params(), &second).unwrap(), "000");
        assert_eq!(default.current(), 500);
    }

    #[test]
    fn bound_counter_carries_across_calls() {
        let clock = pinned();
        let counter = SequenceCounter::new();
        let expander = Expander::new(&clock, &counter);
        assert_eq!(expander.expand("${serialNumber->%d}", &no_params()).unwrap(), "0");
        assert_eq!(expander.expand("${serialNumber->%d}", &no_params()).unwrap(), "1");
    }

    #[test]
    fn bare_directive_fails_the_whole_expansion() {
        let counter = SequenceCounter::new();
        let err = expand("ok ${serialNumber->%d} ${currentTimestamp}", &no_params(), &counter)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidExpression { .. }));
    }

    #[test]
    fn parameters_are_substituted() {
        let counter = SequenceCounter::new();
        let params = maps::of([("name".to_string(), "Ada".to_string())]);
        assert_eq!(expand("${name}", &params, &counter).unwrap(), "Ada");
        assert_eq!(expand("${name}/${name}", &params, &counter).unwrap(), "Ada/Ada");
    }

    #[test]
    fn parameter_values_are_not_rescanned() {
        let counter = SequenceCounter::new();
        let params =
            maps::of([("a".to_string(), "${b}".to_string()), ("b".to_string(), "x".into())]);
        assert_eq!(expand("${a}", &params, &counter).unwrap(), "${b}");
    }

    #[test]
    fn end_to_end_trade_file_name() {
        let clock = FixedClock::parse("2024-01-15T00:00:00").unwrap();
        let counter = SequenceCounter::new();
        let params = maps::of([("file".to_string(), "abc.txt".to_string())]);
        let out = Expander::new(&clock, &counter)
            .expand(
                "trade.12345.${file}.${currentTimestamp->yyyyMMdd}${serialNumber->%02d}",
                &params,
            )
            .unwrap();
        assert_eq!(out, "trade.12345.abc.txt.2024011500");
    }

    #[test]
    fn full_timestamp_and_five_digit_serial() {
        let clock = pinned();
        let counter = SequenceCounter::starting_at(7);
        let template = "test-in_${currentTimestamp->yyyyMMddHHmmssSSS}${serialNumber->%05d}.txt";
        let out = Expander::new(&clock, &counter).expand(template, &no_params()).unwrap();
        assert_eq!(out, "test-in_2024011510203045600007.txt");
    }
}
