#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Engine Stopwatch
//!
//! Interval timing for engine code: a labelled [`Stopwatch`] that reports elapsed
//! time in seconds, reading an injectable [`Clock`](clock::Clock).
//!
//! ## Key Modules
//!
//! * `clock` - The clock capability, the monotonic platform clock and a manual test clock
//! * `core` - Shared-state primitives
//! * `stopwatch` - The stopwatch itself
//! * `report` - Serializable timing snapshots
//! * `sweep` - The noise-field workload timed by the demo binary
//!
//! ## Platform Support
//!
//! Instants come from `web_time`, so the same code measures with
//! `std::time::Instant` natively and `performance.now()` in the browser.
//!
//! ## Usage
//!
//! ```rust
//! use engine_stopwatch::Stopwatch;
//!
//! engine_stopwatch::init_logger();
//!
//! let mut stopwatch = Stopwatch::new(engine_stopwatch::DEMO_STOPWATCH_LABEL);
//! stopwatch.start();
//! // ... work ...
//! stopwatch.log_elapsed()?;
//! # Ok::<(), engine_stopwatch::StopwatchError>(())
//! ```

#[cfg(target_family = "wasm")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(not(target_family = "wasm"))]
use log::{error, info};

pub mod clock;
pub mod core;
pub mod error;
mod logging;
pub mod report;
pub mod stopwatch;
pub mod sweep;

pub use error::StopwatchError;
pub use logging::init_logger;
pub use report::TimingReport;
pub use stopwatch::Stopwatch;

/// Label of the stopwatch the demo binary times its noise sweep with.
pub const DEMO_STOPWATCH_LABEL: &str = "Noise Field Sweep";

/// Native entry point: times one noise sweep and logs the measurement.
#[cfg(not(target_family = "wasm"))]
pub fn run() {
    init_logger();
    info!("Logger initialized");

    let mut stopwatch = Stopwatch::new(DEMO_STOPWATCH_LABEL);
    stopwatch.start();
    let stats = sweep::sweep(
        0,
        sweep::SWEEP_EXTENT,
        sweep::SWEEP_STEP,
        sweep::SWEEP_SCALE_FACTOR,
    );
    info!("{} of {} samples solid", stats.solid, stats.samples);

    match stopwatch.log_elapsed() {
        Ok(report) => match report.to_json() {
            Ok(json) => info!("{json}"),
            Err(e) => error!("Failed to serialize timing report: {e}"),
        },
        Err(e) => error!("{e}"),
    }
}

/// Browser entry point: installs the console logger and reports how long it took.
#[cfg(target_family = "wasm")]
#[wasm_bindgen]
pub fn run_web() {
    let stopwatch = Stopwatch::start_new("Logger Initialization");
    init_logger();
    if let Err(error) = stopwatch.log_elapsed() {
        log::error!("{error}");
    }
}
