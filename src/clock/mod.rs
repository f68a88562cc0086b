//! # Clock Sources
//!
//! Time is read through the [`Clock`] capability instead of calling
//! `Instant::now()` directly, so that anything measuring intervals can be driven by
//! a deterministic clock in tests.
//!
//! ## Implementations
//! - [`MonotonicClock`]: the platform's steady clock, via `web_time`. On native
//!   targets this is `std::time::Instant`; in the browser it is backed by
//!   `performance.now()`. Neither is affected by wall-clock adjustments.
//! - [`ManualClock`]: a clock that only moves when told to.

mod manual;
mod monotonic;

pub use manual::ManualClock;
pub use monotonic::MonotonicClock;

use web_time::Instant;

/// A source of "current instant" reads.
///
/// Successive reads from a well-behaved clock never go backwards.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        (**self).now()
    }
}
