//! Fixed clock adapter for deterministic rendering.

use chrono::NaiveDateTime;

use crate::ports::clock::Clock;

/// Accepted layouts for [`FixedClock::parse`], most specific first.
const LAYOUTS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Clock pinned to a single moment.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports `at`.
    #[must_use]
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }

    /// Parses an ISO-like local date-time (`2024-01-15T09:30:00.250`).
    ///
    /// A bare date (`2024-01-15`) pins the clock to midnight.
    ///
    /// # Errors
    ///
    /// Returns an error string if the input matches none of the accepted layouts.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        for layout in LAYOUTS {
            if let Ok(at) = NaiveDateTime::parse_from_str(input, layout) {
                return Ok(Self::new(at));
            }
        }
        chrono::NaiveDate::parse_from_str(input, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(Self::new)
            .ok_or_else(|| {
                format!("Invalid date-time `{input}`: expected YYYY-MM-DDTHH:MM:SS[.fff]")
            })
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn fixed_clock_serves_the_same_time() {
        let at = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap().and_hms_opt(10, 30, 0).unwrap();
        let clock = FixedClock::new(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn parses_supported_layouts() {
        let clock = FixedClock::parse("2024-01-15T09:30:00.250").unwrap();
        assert_eq!(clock.now().nanosecond(), 250_000_000);

        let clock = FixedClock::parse("2024-01-15 09:30:00").unwrap();
        assert_eq!(clock.now().hour(), 9);

        let clock = FixedClock::parse("2024-01-15").unwrap();
        assert_eq!(clock.now().to_string(), "2024-01-15 00:00:00");
    }

    #[test]
    fn rejects_garbage() {
        let err = FixedClock::parse("yesterday").unwrap_err();
        assert!(err.contains("yesterday"));
    }
}
