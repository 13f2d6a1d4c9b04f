//! Distant spiral galaxies.

use crate::math::{consts, Vector3};
use rand::Rng;

/// Number of galaxies in a generated scene.
pub const GALAXY_COUNT: usize = 5;

/// Angular speed of the slow spiral rotation, radians per second.
const SPIN_RATE: f32 = 0.015;

/// A distant spiral galaxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Galaxy {
    /// World position of the core.
    pub position: Vector3,
    /// Disc radius in world units.
    pub size: f32,
    /// Initial rotation offset in radians.
    pub rotation: f32,
}

impl Galaxy {
    /// Spiral angle at the given elapsed time. Derived on demand so the
    /// scene itself never mutates during playback.
    #[inline]
    pub fn spin(&self, elapsed: f32) -> f32 {
        self.rotation + elapsed * SPIN_RATE
    }
}

/// Generate the galaxy field. Depths are staggered so one galaxy drifts
/// past roughly every chorus.
pub fn spawn_field<R: Rng>(rng: &mut R) -> Vec<Galaxy> {
    let mut galaxies = Vec::with_capacity(GALAXY_COUNT);
    for i in 0..GALAXY_COUNT {
        galaxies.push(Galaxy {
            position: Vector3::new(
                (rng.random::<f32>() - 0.5) * 3000.0,
                (rng.random::<f32>() - 0.5) * 1500.0,
                5000.0 + i as f32 * 3000.0,
            ),
            size: rng.random_range(150.0..250.0),
            rotation: rng.random::<f32>() * consts::PI,
        });
    }
    galaxies
}
