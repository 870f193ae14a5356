//! Deterministic location seeding.
//!
//! Every piece of procedural content in the galaxy is a pure function of a
//! 64-bit seed derived from its world coordinate.  Reloading a region after
//! it was streamed out reproduces it bit-identically without any persistence.

use bevy::prelude::*;
use rand::Rng;

/// Process-wide galaxy seed.  Combined with a world coordinate by
/// [`GalaxySeed::seed_for`] to produce the per-location seed.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalaxySeed(pub i64);

impl GalaxySeed {
    /// Seed used when debug mode is active, so test sessions see the same galaxy.
    pub const DEBUG_SEED: i64 = 1;

    /// Draw a fresh random galaxy seed, or the pinned [`Self::DEBUG_SEED`]
    /// when `debug_mode` is set.
    pub fn new(debug_mode: bool) -> Self {
        let seed = if debug_mode {
            Self::DEBUG_SEED
        } else {
            rand::thread_rng().gen()
        };
        info!("galaxy seed: {seed}");
        GalaxySeed(seed)
    }

    /// Seed for the location `(x, y)`.  Coordinates are truncated to integers;
    /// x occupies the upper 32 bits and y the lower 32, offset by the galaxy
    /// seed.  Pure and total — same inputs always give the same seed.
    pub fn seed_for(&self, x: f32, y: f32) -> i64 {
        seed_for(self.0, x as i64, y as i64)
    }
}

/// `(x << 32) + y + galaxy_seed` with wrapping arithmetic.
///
/// A `long` is 64 bits: x is stored in the upper half, y in the lower half,
/// so distinct integer coordinates in ±2³¹ never collide before the galaxy
/// offset is applied.
pub fn seed_for(galaxy_seed: i64, x: i64, y: i64) -> i64 {
    (x << 32).wrapping_add(y).wrapping_add(galaxy_seed)
}
