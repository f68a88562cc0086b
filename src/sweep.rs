//! Noise-field sweep used by the demo binary as a timed workload.
//!
//! Samples 3D simplex noise over an axis-aligned box centred on the origin and
//! counts the samples that fall outside the empty band, the same test a voxel
//! generator uses to decide whether a cell is solid.

use noise::{NoiseFn, OpenSimplex};

/// Half-width of the sampled box, in voxels.
pub const SWEEP_EXTENT: i32 = 100;
/// Distance between samples along each axis, in voxels.
pub const SWEEP_STEP: usize = 4;
/// Scaling factor applied to voxel coordinates before sampling.
pub const SWEEP_SCALE_FACTOR: f64 = 0.025;
/// Samples inside `-SWEEP_THRESHOLD..=SWEEP_THRESHOLD` count as empty.
pub const SWEEP_THRESHOLD: f64 = 0.2;

/// Result of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepStats {
    pub samples: usize,
    pub solid: usize,
}

/// Samples the box `[-extent, extent)^3` every `step` voxels.
///
/// # Arguments
/// * `seed` - Noise seed
/// * `extent` - Half-width of the box
/// * `step` - Sample spacing, must be non-zero
/// * `scale_factor` - Multiplier turning voxel coordinates into noise coordinates
///
/// # Returns
/// How many points were sampled and how many of them are solid.
pub fn sweep(seed: u32, extent: i32, step: usize, scale_factor: f64) -> SweepStats {
    let noise = OpenSimplex::new(seed);
    let mut stats = SweepStats {
        samples: 0,
        solid: 0,
    };

    for z in (-extent..extent).step_by(step) {
        for y in (-extent..extent).step_by(step) {
            for x in (-extent..extent).step_by(step) {
                let sample = noise.get([
                    x as f64 * scale_factor,
                    y as f64 * scale_factor,
                    z as f64 * scale_factor,
                ]);
                stats.samples += 1;
                if !(-SWEEP_THRESHOLD..=SWEEP_THRESHOLD).contains(&sample) {
                    stats.solid += 1;
                }
            }
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_every_step_along_each_axis() {
        let stats = sweep(0, 8, 4, SWEEP_SCALE_FACTOR);

        // -8, -4, 0, 4 on each axis
        assert_eq!(stats.samples, 4 * 4 * 4);
        assert!(stats.solid <= stats.samples);
    }

    #[test]
    fn same_seed_is_deterministic() {
        assert_eq!(
            sweep(7, 12, 3, SWEEP_SCALE_FACTOR),
            sweep(7, 12, 3, SWEEP_SCALE_FACTOR)
        );
    }

    #[test]
    fn empty_box_has_no_samples() {
        assert_eq!(sweep(0, 0, 1, SWEEP_SCALE_FACTOR).samples, 0);
    }
}
