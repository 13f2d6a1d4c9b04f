//! Perspective projection of world points onto the square viewport.

use crate::math::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Default focal length in pixels.
pub const DEFAULT_FOCAL_LENGTH: f32 = 600.0;
/// Default near plane distance in world units.
pub const DEFAULT_NEAR_PLANE: f32 = 10.0;

/// A world point projected onto the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Screen position in viewport pixels, origin at the top left.
    pub screen: Vector2,
    /// Perspective scale factor; sizes in world units multiply by this.
    pub scale: f32,
    /// Distance ahead of the camera along the flight axis.
    pub depth: f32,
}

/// Pinhole projector for the forward-flying camera.
///
/// The camera looks down +Z from `(0, 0, camera_depth)`. Points behind
/// the near plane and points landing outside the circular viewport
/// project to `None`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projector {
    focal_length: f32,
    near_plane: f32,
}

impl Projector {
    /// Create a projector with the given focal length and near plane.
    pub const fn new(focal_length: f32, near_plane: f32) -> Self {
        Self {
            focal_length,
            near_plane,
        }
    }

    /// Focal length in pixels.
    #[inline]
    pub fn focal_length(&self) -> f32 {
        self.focal_length
    }

    /// Near plane distance in world units.
    #[inline]
    pub fn near_plane(&self) -> f32 {
        self.near_plane
    }

    /// Project a world point for a camera at the given depth.
    ///
    /// Returns `None` when the point sits behind the near plane or maps
    /// outside the circular viewport.
    pub fn project(
        &self,
        position: &Vector3,
        camera_depth: f32,
        viewport: f32,
    ) -> Option<Projection> {
        let rel = position.z - camera_depth;
        if rel < self.near_plane {
            return None;
        }
        let scale = self.focal_length / rel;
        let center = Vector2::splat(viewport * 0.5);
        let screen = center + position.xy() * scale;
        if screen.distance_to(&center) > viewport * 0.5 {
            return None;
        }
        Some(Projection {
            screen,
            scale,
            depth: rel,
        })
    }
}

impl Default for Projector {
    fn default() -> Self {
        Self::new(DEFAULT_FOCAL_LENGTH, DEFAULT_NEAR_PLANE)
    }
}
