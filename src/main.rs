//! # Stopwatch Demo
//!
//! Times a simplex-noise sweep over a 200-voxel box and logs the result, once as a
//! human-readable line and once as JSON.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release
//! ```

fn main() {
    #[cfg(not(target_family = "wasm"))]
    engine_stopwatch::run();
}
