use thiserror::Error;

/// Errors reported by a [`Stopwatch`](crate::Stopwatch).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StopwatchError {
    /// Elapsed time was requested before the stopwatch was ever started.
    #[error("stopwatch `{label}` was queried before start")]
    NotStarted { label: String },
}
