//! Procedural nebula clouds.

use crate::math::{Color, Vector3};
use rand::Rng;

/// Number of nebulae in a generated scene.
pub const NEBULA_COUNT: usize = 80;

/// RGB palette the clouds draw from.
const PALETTE: [(u8, u8, u8); 5] = [
    (200, 100, 180),
    (100, 150, 200),
    (200, 120, 80),
    (120, 180, 150),
    (180, 80, 200),
];

/// A soft gas cloud billboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nebula {
    /// World position of the cloud center.
    pub position: Vector3,
    /// Cloud radius in world units.
    pub size: f32,
    /// Base opacity before brightness and fade scaling.
    pub opacity: f32,
    /// Cloud tint.
    pub color: Color,
}

/// Generate the nebula field.
pub fn spawn_field<R: Rng>(rng: &mut R) -> Vec<Nebula> {
    let mut nebulae = Vec::with_capacity(NEBULA_COUNT);
    for _ in 0..NEBULA_COUNT {
        let position = Vector3::new(
            (rng.random::<f32>() - 0.5) * 5000.0,
            (rng.random::<f32>() - 0.5) * 2500.0,
            rng.random_range(3000.0..18_000.0),
        );
        let (r, g, b) = PALETTE[rng.random_range(0..PALETTE.len())];
        nebulae.push(Nebula {
            position,
            size: rng.random_range(200.0..550.0),
            opacity: rng.random_range(0.03..0.08),
            color: Color::from_rgb_bytes(r, g, b),
        });
    }
    nebulae
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_field_population() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = spawn_field(&mut rng);
        assert_eq!(field.len(), NEBULA_COUNT);
        for nebula in &field {
            assert!(nebula.position.x.abs() <= 2500.0);
            assert!(nebula.position.y.abs() <= 1250.0);
            assert!(nebula.position.z >= 3000.0 && nebula.position.z < 18_000.0);
            assert!(nebula.size >= 200.0 && nebula.size < 550.0);
            assert!(nebula.opacity >= 0.03 && nebula.opacity < 0.08);
        }
    }

    #[test]
    fn test_colors_come_from_palette() {
        let mut rng = StdRng::seed_from_u64(11);
        let field = spawn_field(&mut rng);
        for nebula in &field {
            let [r, g, b] = nebula.color.to_rgb_bytes();
            assert!(PALETTE.contains(&(r, g, b)));
        }
    }
}
