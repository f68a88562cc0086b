//! # Stopwatch
//!
//! A labelled interval timer. The label only appears in diagnostics; timing is
//! purely a function of the clock reads taken by [`Stopwatch::start`] and the
//! later queries.
//!
//! ## Lifecycle
//! A stopwatch is created unstarted. [`Stopwatch::start`] records the reference
//! instant and may be called again at any time to move it. Queries never touch the
//! reference instant, so repeated calls report growing durations from the most
//! recent start. Querying an unstarted stopwatch is an error.
//!
//! ## Usage
//! ```rust
//! use engine_stopwatch::Stopwatch;
//!
//! let mut stopwatch = Stopwatch::new("chunk generation");
//! stopwatch.start();
//! // ... work ...
//! let seconds = stopwatch.elapsed()?;
//! # Ok::<(), engine_stopwatch::StopwatchError>(())
//! ```

use std::fmt;

use log::info;
use web_time::{Duration, Instant};

use crate::{
    clock::{Clock, MonotonicClock},
    error::StopwatchError,
    report::TimingReport,
};

/// Measures time elapsed since the last call to [`Stopwatch::start`].
///
/// # Type Parameters
/// - `C`: The clock the stopwatch reads, [`MonotonicClock`] unless injected
///
/// # Thread Safety
/// There is no internal synchronization. `start` and `restart` take `&mut self`,
/// so sharing one stopwatch across threads requires external locking; usually each
/// thread owns its own.
#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = MonotonicClock> {
    label: String,
    clock: C,
    started_at: Option<Instant>,
}

impl Stopwatch<MonotonicClock> {
    /// Creates an unstarted stopwatch on the platform's monotonic clock.
    ///
    /// # Arguments
    /// * `label` - Name used when reporting, e.g. `"Application Initialization"`
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_clock(label, MonotonicClock::new())
    }

    /// Creates a stopwatch on the monotonic clock and starts it immediately.
    pub fn start_new(label: impl Into<String>) -> Self {
        let mut stopwatch = Self::new(label);
        stopwatch.start();
        stopwatch
    }
}

impl<C: Clock> Stopwatch<C> {
    /// Creates an unstarted stopwatch reading `clock`.
    ///
    /// # Arguments
    /// * `label` - Name used when reporting
    /// * `clock` - Source of instants for every start and query
    pub fn with_clock(label: impl Into<String>, clock: C) -> Self {
        Self {
            label: label.into(),
            clock,
            started_at: None,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Records the current instant as the reference point, replacing any earlier one.
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
    }

    /// Returns the time since the most recent [`start`](Self::start).
    ///
    /// An injected clock that reports an instant before the reference point yields
    /// zero rather than a negative duration.
    ///
    /// # Errors
    /// [`StopwatchError::NotStarted`] if `start` was never called.
    pub fn elapsed_duration(&self) -> Result<Duration, StopwatchError> {
        let started_at = self.started_at.ok_or_else(|| self.not_started())?;
        Ok(self.clock.now().saturating_duration_since(started_at))
    }

    /// Returns the time since the most recent [`start`](Self::start), in seconds.
    ///
    /// # Errors
    /// [`StopwatchError::NotStarted`] if `start` was never called.
    pub fn elapsed(&self) -> Result<f64, StopwatchError> {
        Ok(self.elapsed_duration()?.as_secs_f64())
    }

    /// Returns the elapsed seconds and starts a new interval at the same instant.
    ///
    /// Both the returned value and the new reference point come from a single
    /// clock read, so consecutive laps add up to the total.
    ///
    /// # Errors
    /// [`StopwatchError::NotStarted`] if `start` was never called. The stopwatch is
    /// left unstarted in that case.
    pub fn restart(&mut self) -> Result<f64, StopwatchError> {
        let started_at = self.started_at.ok_or_else(|| self.not_started())?;
        let now = self.clock.now();
        self.started_at = Some(now);
        Ok(now.saturating_duration_since(started_at).as_secs_f64())
    }

    /// Takes a snapshot of the label and elapsed seconds.
    ///
    /// # Errors
    /// [`StopwatchError::NotStarted`] if `start` was never called.
    pub fn report(&self) -> Result<TimingReport, StopwatchError> {
        Ok(TimingReport::new(self.label.clone(), self.elapsed()?))
    }

    /// Logs `"<label>: <seconds>s"` at info level and returns the logged report.
    ///
    /// # Errors
    /// [`StopwatchError::NotStarted`] if `start` was never called. Nothing is logged.
    pub fn log_elapsed(&self) -> Result<TimingReport, StopwatchError> {
        let report = self.report()?;
        info!("{report}");
        Ok(report)
    }

    fn not_started(&self) -> StopwatchError {
        StopwatchError::NotStarted {
            label: self.label.clone(),
        }
    }
}

impl<C: Clock> fmt::Display for Stopwatch<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.elapsed() {
            Ok(seconds) => write!(f, "[{}] {:.6}s", self.label, seconds),
            Err(_) => write!(f, "[{}] not started", self.label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const TOLERANCE: f64 = 1e-6;

    fn manual(label: &str) -> (Stopwatch<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (Stopwatch::with_clock(label, clock.clone()), clock)
    }

    #[test]
    fn new_stopwatch_is_unstarted() {
        let (stopwatch, _) = manual("idle");

        assert!(!stopwatch.is_started());
        assert_eq!(
            stopwatch.elapsed(),
            Err(StopwatchError::NotStarted {
                label: "idle".to_string()
            })
        );
    }

    #[test]
    fn elapsed_does_not_reset() {
        let (mut stopwatch, clock) = manual("phase1");
        stopwatch.start();

        clock.set_secs(2.5);
        assert!((stopwatch.elapsed().unwrap() - 2.5).abs() < TOLERANCE);

        clock.set_secs(4.0);
        assert!((stopwatch.elapsed().unwrap() - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn start_moves_reference_point() {
        let (mut stopwatch, clock) = manual("restartable");
        stopwatch.start();
        clock.advance_secs(3.0);

        stopwatch.start();
        clock.advance_secs(0.5);

        assert!((stopwatch.elapsed().unwrap() - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn restart_returns_lap_and_rearms() {
        let (mut stopwatch, clock) = manual("laps");
        stopwatch.start();

        clock.advance_secs(1.25);
        let lap = stopwatch.restart().unwrap();
        clock.advance_secs(0.75);

        assert!((lap - 1.25).abs() < TOLERANCE);
        assert!((stopwatch.elapsed().unwrap() - 0.75).abs() < TOLERANCE);
    }

    #[test]
    fn restart_before_start_leaves_stopwatch_unstarted() {
        let (mut stopwatch, _) = manual("laps");

        assert!(stopwatch.restart().is_err());
        assert!(!stopwatch.is_started());
    }

    #[test]
    fn clock_running_backwards_saturates_at_zero() {
        let (mut stopwatch, clock) = manual("skewed");
        clock.set_secs(5.0);
        stopwatch.start();

        clock.set_secs(1.0);
        assert_eq!(stopwatch.elapsed_duration().unwrap(), Duration::ZERO);
    }

    #[test]
    fn report_snapshots_label_and_seconds() {
        let (mut stopwatch, clock) = manual("mesh");
        stopwatch.start();
        clock.advance_secs(0.125);

        let report = stopwatch.log_elapsed().unwrap();
        assert_eq!(report.label, "mesh");
        assert!((report.seconds - 0.125).abs() < TOLERANCE);
    }

    #[test]
    fn display_reflects_state() {
        let (mut stopwatch, clock) = manual("upload");
        assert_eq!(stopwatch.to_string(), "[upload] not started");

        stopwatch.start();
        clock.advance_secs(2.0);
        assert_eq!(stopwatch.to_string(), "[upload] 2.000000s");
    }

    #[test]
    fn start_new_is_started() {
        let stopwatch = Stopwatch::start_new("init");

        assert!(stopwatch.is_started());
        assert!(stopwatch.elapsed().unwrap() >= 0.0);
    }
}
