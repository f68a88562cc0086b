//! Serializable snapshots of a measurement, for log lines and diagnostics dumps.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labelled elapsed time, in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    pub label: String,
    pub seconds: f64,
}

impl TimingReport {
    pub fn new(label: impl Into<String>, seconds: f64) -> Self {
        Self {
            label: label.into(),
            seconds,
        }
    }

    /// Renders the report as a single-line JSON object.
    ///
    /// # Returns
    /// `{"label":"...","seconds":...}`, or the serializer's error.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.6}s", self.label, self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_carries_label_and_seconds() {
        let report = TimingReport::new("phase1", 2.5);

        assert_eq!(
            report.to_json().unwrap(),
            r#"{"label":"phase1","seconds":2.5}"#
        );
    }

    #[test]
    fn parses_back_from_json() {
        let report: TimingReport =
            serde_json::from_str(r#"{"label":"mesh","seconds":0.125}"#).unwrap();

        assert_eq!(report, TimingReport::new("mesh", 0.125));
    }

    #[test]
    fn display_uses_microsecond_precision() {
        assert_eq!(TimingReport::new("load", 1.0).to_string(), "load: 1.000000s");
    }
}
