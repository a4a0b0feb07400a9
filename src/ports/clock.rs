//! Clock port for obtaining the current time.

use chrono::NaiveDateTime;

/// Provides the current wall-clock time.
///
/// Abstracting time access lets timestamps in templates and identifiers be
/// rendered against a pinned moment in tests and from the CLI.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time, without an offset.
    fn now(&self) -> NaiveDateTime;
}
