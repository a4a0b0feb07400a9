//! Service context bundling the port trait objects and the shared counter.

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::filesystem::LiveFileSystem;
use crate::expr::{Expander, SequenceCounter};
use crate::files::Files;
use crate::id::SerialIdGenerator;
use crate::ports::clock::Clock;
use crate::ports::filesystem::FileSystem;

/// Bundles the external boundaries with the one piece of shared state.
///
/// Everything that draws serial numbers from a context draws them from the
/// same [`SequenceCounter`], so values stay distinct across expansions and
/// identifiers produced by one process.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Filesystem for file I/O.
    pub fs: Box<dyn FileSystem>,
    /// Sequence shared by expansions and serial identifiers.
    pub counter: SequenceCounter,
}

impl ServiceContext {
    /// Creates a context with live adapters and a counter starting at zero.
    #[must_use]
    pub fn live() -> Self {
        Self::new(Box::new(LiveClock), Box::new(LiveFileSystem))
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(clock: Box<dyn Clock>, fs: Box<dyn FileSystem>) -> Self {
        Self { clock, fs, counter: SequenceCounter::new() }
    }

    /// Replaces the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Restarts the shared counter at `start`.
    #[must_use]
    pub fn with_counter_start(mut self, start: u64) -> Self {
        self.counter = SequenceCounter::starting_at(start);
        self
    }

    /// Template expander bound to this context's clock and counter.
    #[must_use]
    pub fn expander(&self) -> Expander<'_> {
        Expander::new(self.clock.as_ref(), &self.counter)
    }

    /// Serial identifier generator bound to this context's clock and counter.
    #[must_use]
    pub fn id_generator(&self) -> SerialIdGenerator<'_> {
        SerialIdGenerator::new(self.clock.as_ref(), &self.counter)
    }

    /// File helpers over this context's filesystem.
    #[must_use]
    pub fn files(&self) -> Files<'_> {
        Files::new(self.fs.as_ref())
    }
}
