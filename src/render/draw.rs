//! Draw commands emitted by the render pipeline.
//!
//! Passes never touch a canvas directly; they append commands to a
//! [`DrawList`] and a host executes the list against its 2D surface.
//! Gradients are concentric, but a gradient center may sit away from
//! the shape it fills, which is how the planet limb shading and the
//! Earth specular highlight get their off-axis look.

use crate::math::{Color, Vector2};
use serde::{Deserialize, Serialize};

/// A color with an alpha channel, as drawn.
#[repr(C)]
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, bytemuck::Pod, bytemuck::Zeroable,
)]
pub struct Rgba {
    /// Base color.
    pub color: Color,
    /// Opacity in `[0, 1]`.
    pub alpha: f32,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        color: Color::BLACK,
        alpha: 0.0,
    };

    /// Create a color with the given opacity.
    pub const fn new(color: Color, alpha: f32) -> Self {
        Self { color, alpha }
    }

    /// White at the given opacity.
    pub const fn white(alpha: f32) -> Self {
        Self::new(Color::WHITE, alpha)
    }

    /// Build from 8-bit channels and an opacity.
    pub fn from_bytes(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self::new(Color::from_rgb_bytes(r, g, b), alpha)
    }

    /// The same color with a different opacity.
    pub const fn with_alpha(&self, alpha: f32) -> Self {
        Self::new(self.color, alpha)
    }

    /// Render as a CSS `rgba(...)` string.
    pub fn to_css(&self) -> String {
        let [r, g, b] = self.color.to_rgb_bytes();
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha.clamp(0.0, 1.0))
    }
}

/// One gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    /// Color at this position.
    pub color: Rgba,
}

/// A concentric radial gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Gradient center in viewport pixels.
    pub center: Vector2,
    /// Radius where the first stop sits.
    pub inner_radius: f32,
    /// Radius where the last stop sits.
    pub radius: f32,
    /// Stops in ascending offset order.
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    /// Start a gradient with no stops.
    pub fn new(center: Vector2, inner_radius: f32, radius: f32) -> Self {
        Self {
            center,
            inner_radius,
            radius,
            stops: Vec::new(),
        }
    }

    /// Append a color stop.
    pub fn stop(mut self, offset: f32, color: Rgba) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// How a shape is filled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    /// A flat color.
    Solid(Rgba),
    /// A radial gradient.
    Radial(RadialGradient),
}

/// Compositing mode for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    /// Normal alpha compositing.
    #[default]
    SourceOver,
    /// Additive screen compositing, used for glows.
    Screen,
}

/// A single 2D drawing operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Fill the whole viewport with an opaque color.
    Clear {
        /// Background color.
        color: Color,
    },
    /// A filled circle.
    Disc {
        /// Center in viewport pixels.
        center: Vector2,
        /// Radius in pixels.
        radius: f32,
        /// Fill style.
        fill: Fill,
        /// Compositing mode.
        blend: BlendMode,
    },
    /// A filled rotated ellipse.
    Ellipse {
        /// Center in viewport pixels.
        center: Vector2,
        /// Horizontal radius before rotation.
        rx: f32,
        /// Vertical radius before rotation.
        ry: f32,
        /// Rotation in radians.
        rotation: f32,
        /// Fill style.
        fill: Fill,
        /// Compositing mode.
        blend: BlendMode,
    },
    /// A stroked rotated ellipse outline.
    EllipseStroke {
        /// Center in viewport pixels.
        center: Vector2,
        /// Horizontal radius before rotation.
        rx: f32,
        /// Vertical radius before rotation.
        ry: f32,
        /// Rotation in radians.
        rotation: f32,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
    },
    /// A stroked circle outline.
    CircleStroke {
        /// Center in viewport pixels.
        center: Vector2,
        /// Radius in pixels.
        radius: f32,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
    },
    /// An open stroked path.
    Polyline {
        /// Path vertices in order.
        points: Vec<Vector2>,
        /// Stroke color.
        color: Rgba,
        /// Stroke width in pixels.
        width: f32,
        /// Compositing mode.
        blend: BlendMode,
    },
    /// Fill the whole viewport with a translucent layer.
    Overlay {
        /// Fill style.
        fill: Fill,
    },
}

/// An ordered list of draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
}

impl DrawList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    /// All commands in draw order.
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    /// Number of commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list holds no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all commands, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_css_formatting() {
        assert_eq!(Rgba::white(1.0).to_css(), "rgba(255, 255, 255, 1)");
        assert_eq!(
            Rgba::from_bytes(100, 180, 255, 0.5).to_css(),
            "rgba(100, 180, 255, 0.5)"
        );
        // Out-of-range alpha clamps rather than leaking into the string.
        assert_eq!(Rgba::white(1.7).to_css(), "rgba(255, 255, 255, 1)");
        assert_eq!(Rgba::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }

    #[test]
    fn test_gradient_builder_keeps_stop_order() {
        let grad = RadialGradient::new(Vector2::splat(400.0), 0.0, 90.0)
            .stop(0.0, Rgba::white(0.8))
            .stop(0.5, Rgba::white(0.2))
            .stop(1.0, Rgba::TRANSPARENT);
        assert_eq!(grad.stops.len(), 3);
        assert_eq!(grad.stops[0].offset, 0.0);
        assert_eq!(grad.stops[1].color.alpha, 0.2);
        assert_eq!(grad.stops[2].color, Rgba::TRANSPARENT);
    }

    #[test]
    fn test_draw_list_accumulates() {
        let mut list = DrawList::new();
        assert!(list.is_empty());
        list.push(DrawCmd::Clear {
            color: Color::BLACK,
        });
        list.push(DrawCmd::Disc {
            center: Vector2::splat(10.0),
            radius: 2.0,
            fill: Fill::Solid(Rgba::white(1.0)),
            blend: BlendMode::Screen,
        });
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }
}
