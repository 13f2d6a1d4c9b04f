//! Procedural star layers.

use crate::math::{consts, Color, Vector3};
use rand::Rng;

/// Tints for the far layer; every other layer stays white.
const FAR_PALETTE: [u32; 7] = [
    0xffffff, 0xffe4c4, 0xadd8e6, 0xffd700, 0x87ceeb, 0xffb0a0, 0xa0c0ff,
];

const WHITE_PALETTE: [u32; 1] = [0xffffff];

/// A single star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// World position. The flight axis is +Z.
    pub position: Vector3,
    /// Base size in world units, before perspective scaling.
    pub size: f32,
    /// Base brightness multiplier.
    pub brightness: f32,
    /// Tint, white for most layers.
    pub color: Color,
}

/// Generation parameters for one star layer.
#[derive(Debug, Clone, Copy)]
pub struct StarLayerSettings {
    /// Number of stars to spawn.
    pub count: usize,
    /// Minimum lateral distance from the flight axis.
    pub radius_min: f32,
    /// Maximum lateral distance from the flight axis.
    pub radius_max: f32,
    /// Minimum depth along the flight axis.
    pub depth_min: f32,
    /// Maximum depth along the flight axis.
    pub depth_max: f32,
    /// Minimum base size.
    pub size_min: f32,
    /// Maximum base size.
    pub size_max: f32,
    /// Minimum base brightness.
    pub brightness_min: f32,
    /// Maximum base brightness.
    pub brightness_max: f32,
    /// Hex tints to draw from, uniformly.
    pub palette: &'static [u32],
}

impl StarLayerSettings {
    /// Dense distant field, the only tinted layer.
    pub const fn far() -> Self {
        Self {
            count: 35_000,
            radius_min: 200.0,
            radius_max: 4200.0,
            depth_min: 6000.0,
            depth_max: 25_000.0,
            size_min: 0.3,
            size_max: 1.3,
            brightness_min: 0.15,
            brightness_max: 0.5,
            palette: &FAR_PALETTE,
        }
    }

    /// Mid-distance field.
    pub const fn mid() -> Self {
        Self {
            count: 15_000,
            radius_min: 150.0,
            radius_max: 2650.0,
            depth_min: 1500.0,
            depth_max: 12_000.0,
            size_min: 0.5,
            size_max: 2.0,
            brightness_min: 0.25,
            brightness_max: 0.75,
            palette: &WHITE_PALETTE,
        }
    }

    /// Sparse close field that streaks past the camera.
    pub const fn near() -> Self {
        Self {
            count: 5000,
            radius_min: 50.0,
            radius_max: 850.0,
            depth_min: 500.0,
            depth_max: 6000.0,
            size_min: 1.0,
            size_max: 3.5,
            brightness_min: 0.4,
            brightness_max: 1.1,
            palette: &WHITE_PALETTE,
        }
    }

    /// Deep backdrop revealed during the second half of the track.
    pub const fn backdrop() -> Self {
        Self {
            count: 8000,
            radius_min: 300.0,
            radius_max: 2300.0,
            depth_min: 8000.0,
            depth_max: 15_000.0,
            size_min: 0.4,
            size_max: 1.6,
            brightness_min: 0.3,
            brightness_max: 0.8,
            palette: &WHITE_PALETTE,
        }
    }
}

/// One generated layer of stars.
#[derive(Debug, Clone)]
pub struct StarLayer {
    stars: Vec<Star>,
}

impl StarLayer {
    /// Generate a layer from the given settings.
    ///
    /// Lateral placement samples a uniform sphere direction and keeps its
    /// (x, y), so stars cluster toward the flight axis; depth is drawn
    /// independently per layer.
    pub fn spawn<R: Rng>(rng: &mut R, settings: &StarLayerSettings) -> Self {
        let mut stars = Vec::with_capacity(settings.count);
        for _ in 0..settings.count {
            let theta = rng.random::<f32>() * consts::TWO_PI;
            let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
            let direction = Vector3::from_spherical(theta, phi);
            let radius = rng.random_range(settings.radius_min..settings.radius_max);
            let position = Vector3::new(
                direction.x * radius,
                direction.y * radius,
                rng.random_range(settings.depth_min..settings.depth_max),
            );
            let tint = settings.palette[rng.random_range(0..settings.palette.len())];
            stars.push(Star {
                position,
                size: rng.random_range(settings.size_min..settings.size_max),
                brightness: rng.random_range(settings.brightness_min..settings.brightness_max),
                color: Color::from_hex(tint),
            });
        }
        Self { stars }
    }

    /// All stars in this layer.
    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Number of stars in this layer.
    #[inline]
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// Whether the layer holds no stars.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_counts() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(StarLayer::spawn(&mut rng, &StarLayerSettings::far()).len(), 35_000);
        assert_eq!(StarLayer::spawn(&mut rng, &StarLayerSettings::mid()).len(), 15_000);
        assert_eq!(StarLayer::spawn(&mut rng, &StarLayerSettings::near()).len(), 5000);
        assert_eq!(
            StarLayer::spawn(&mut rng, &StarLayerSettings::backdrop()).len(),
            8000
        );
    }

    #[test]
    fn test_stars_respect_settings_bounds() {
        let settings = StarLayerSettings::near();
        let mut rng = StdRng::seed_from_u64(42);
        let layer = StarLayer::spawn(&mut rng, &settings);
        for star in layer.stars() {
            let lateral = star.position.xy().length();
            assert!(lateral < settings.radius_max + 1e-3);
            assert!(star.position.z >= settings.depth_min);
            assert!(star.position.z < settings.depth_max);
            assert!(star.size >= settings.size_min && star.size < settings.size_max);
            assert!(star.brightness >= settings.brightness_min);
            assert!(star.brightness < settings.brightness_max);
            assert_eq!(star.color, Color::WHITE);
        }
    }

    #[test]
    fn test_far_layer_draws_from_palette() {
        let mut rng = StdRng::seed_from_u64(3);
        let layer = StarLayer::spawn(&mut rng, &StarLayerSettings::far());
        for star in layer.stars().iter().take(500) {
            assert!(FAR_PALETTE.contains(&star.color.to_hex()));
        }
    }

    #[test]
    fn test_spawn_is_seed_deterministic() {
        let settings = StarLayerSettings::mid();
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let first = StarLayer::spawn(&mut a, &settings);
        let second = StarLayer::spawn(&mut b, &settings);
        assert_eq!(first.stars()[0], second.stars()[0]);
        assert_eq!(first.stars()[14_999], second.stars()[14_999]);
    }
}
