//! The solar system: fixed planet table and orbital motion.

use crate::math::{Color, Vector3};

/// Depth of the sun along the flight axis, in world units.
pub const SUN_DEPTH: f32 = 8500.0;

/// Index of Earth in [`PLANETS`].
pub const EARTH_INDEX: usize = 2;

/// Orbital descriptor for one planet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Planet {
    /// Planet name.
    pub name: &'static str,
    /// Orbital distance from the sun, in world units.
    pub distance: f32,
    /// Body radius in world units.
    pub radius: f32,
    /// Surface tint as a packed `0xRRGGBB` value.
    pub color: u32,
    /// Orbital angular speed in radians per second.
    pub speed: f32,
    /// Whether the planet carries a ring system.
    pub ringed: bool,
}

/// The eight planets, ordered outward from the sun.
pub const PLANETS: [Planet; 8] = [
    Planet {
        name: "Mercury",
        distance: 80.0,
        radius: 4.0,
        color: 0xa0522d,
        speed: 1.8,
        ringed: false,
    },
    Planet {
        name: "Venus",
        distance: 130.0,
        radius: 7.0,
        color: 0xdaa520,
        speed: 1.2,
        ringed: false,
    },
    Planet {
        name: "Earth",
        distance: 190.0,
        radius: 9.0,
        color: 0x4169e1,
        speed: 0.8,
        ringed: false,
    },
    Planet {
        name: "Mars",
        distance: 260.0,
        radius: 6.0,
        color: 0xcd5c5c,
        speed: 0.6,
        ringed: false,
    },
    Planet {
        name: "Jupiter",
        distance: 360.0,
        radius: 24.0,
        color: 0xf4a460,
        speed: 0.35,
        ringed: false,
    },
    Planet {
        name: "Saturn",
        distance: 480.0,
        radius: 20.0,
        color: 0xdeb887,
        speed: 0.22,
        ringed: true,
    },
    Planet {
        name: "Uranus",
        distance: 600.0,
        radius: 12.0,
        color: 0x87ceeb,
        speed: 0.12,
        ringed: false,
    },
    Planet {
        name: "Neptune",
        distance: 720.0,
        radius: 11.0,
        color: 0x4682b4,
        speed: 0.08,
        ringed: false,
    },
];

impl Planet {
    /// Surface tint as a [`Color`].
    #[inline]
    pub fn base_color(&self) -> Color {
        Color::from_hex(self.color)
    }

    /// Orbital position at the given elapsed time.
    ///
    /// A pure function of time and the planet's table index; the phase
    /// offset `index * 0.8` keeps the planets from lining up. Orbits are
    /// flattened to 35 percent vertically and bow 12 percent in depth
    /// around the sun.
    pub fn position(&self, elapsed: f32, index: usize) -> Vector3 {
        let angle = elapsed * self.speed + index as f32 * 0.8;
        let (sin, cos) = angle.sin_cos();
        Vector3::new(
            cos * self.distance,
            sin * self.distance * 0.35,
            SUN_DEPTH + sin * self.distance * 0.12,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(PLANETS.len(), 8);
        assert_eq!(PLANETS[EARTH_INDEX].name, "Earth");
        assert_eq!(PLANETS[EARTH_INDEX].color, 0x4169e1);
        assert_eq!(PLANETS[0].name, "Mercury");
        assert_eq!(PLANETS[7].name, "Neptune");
        let ringed: Vec<_> = PLANETS.iter().filter(|p| p.ringed).collect();
        assert_eq!(ringed.len(), 1);
        assert_eq!(ringed[0].name, "Saturn");
    }

    #[test]
    fn test_position_is_pure() {
        for (i, planet) in PLANETS.iter().enumerate() {
            let a = planet.position(73.25, i);
            let b = planet.position(73.25, i);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_orbit_geometry() {
        for (i, planet) in PLANETS.iter().enumerate() {
            for step in 0..40 {
                let t = step as f32 * 4.03;
                let p = planet.position(t, i);
                assert!(p.xy().length() <= planet.distance * 1.001);
                assert!(p.y.abs() <= planet.distance * 0.35 + 1e-3);
                assert!((p.z - SUN_DEPTH).abs() <= planet.distance * 0.12 + 1e-3);
            }
        }
    }

    #[test]
    fn test_orbit_is_periodic() {
        let mercury = &PLANETS[0];
        let period = core::f32::consts::TAU / mercury.speed;
        let a = mercury.position(2.0, 0);
        let b = mercury.position(2.0 + period, 0);
        assert!(a.approx_eq(&b, 1e-2));
    }

    #[test]
    fn test_phase_offsets_separate_planets() {
        // Identical speeds would still start at distinct angles.
        let earth = PLANETS[EARTH_INDEX].position(0.0, EARTH_INDEX);
        let mars = PLANETS[3].position(0.0, 3);
        assert!((earth.x / PLANETS[EARTH_INDEX].distance
            - mars.x / PLANETS[3].distance)
            .abs()
            > 1e-3);
    }
}
