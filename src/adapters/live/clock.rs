//! Live clock using the system clock.

use chrono::{Local, NaiveDateTime};

use crate::ports::clock::Clock;

/// Live clock that returns the real current local time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
