use web_time::{Duration, Instant};

use super::Clock;
use crate::core::SharedValue;

/// A clock that stands still until it is advanced.
///
/// `ManualClock` anchors itself to a real instant at construction and reports
/// `origin + offset`, where the offset is only changed through [`advance`] and
/// [`set`]. Clones share the offset, so a test can hand one clone to a
/// [`Stopwatch`](crate::Stopwatch) and keep another to move time forward.
///
/// # Examples
///
/// ```
/// use engine_stopwatch::{clock::ManualClock, Stopwatch};
///
/// let clock = ManualClock::new();
/// let mut stopwatch = Stopwatch::with_clock("phase1", clock.clone());
///
/// stopwatch.start();
/// clock.advance_secs(2.5);
/// assert!((stopwatch.elapsed().unwrap() - 2.5).abs() < 1e-6);
/// ```
///
/// [`advance`]: ManualClock::advance
/// [`set`]: ManualClock::set
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: SharedValue<Duration>,
}

impl ManualClock {
    /// Creates a clock reading "t = 0".
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: SharedValue::new(Duration::ZERO),
        }
    }

    /// Moves the clock forward by `step`.
    pub fn advance(&self, step: Duration) {
        self.offset.update(|offset| *offset += step);
    }

    /// Moves the clock forward by `seconds`.
    ///
    /// # Panics
    /// Panics if `seconds` is negative, not finite, or overflows a `Duration`.
    pub fn advance_secs(&self, seconds: f64) {
        self.advance(Duration::from_secs_f64(seconds));
    }

    /// Sets the clock to read `origin + offset`.
    ///
    /// Setting an offset smaller than the current one makes the clock run
    /// backwards, which a real monotonic clock never does. It is allowed here so
    /// that consumers can be tested against a misbehaving source.
    pub fn set(&self, offset: Duration) {
        self.offset.set(offset);
    }

    /// Sets the clock to read `seconds` past its origin.
    ///
    /// # Panics
    /// Same conditions as [`ManualClock::advance_secs`].
    pub fn set_secs(&self, seconds: f64) {
        self.set(Duration::from_secs_f64(seconds));
    }

    /// Time elapsed on this clock since it was created.
    pub fn offset(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}
