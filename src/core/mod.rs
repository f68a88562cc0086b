//! # Core Module
//!
//! Shared-state primitives used by the rest of the crate.
//!
//! ## Key Components
//! - `SharedValue`: Thread-safe, reference-counted cell for small `Copy` values

pub mod shared_value;

pub use shared_value::SharedValue;
