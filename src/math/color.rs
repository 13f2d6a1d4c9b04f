//! Color implementation with RGB support.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// RGB color with values in 0.0-1.0 range.
///
/// Scene palettes are stored as structured colors at generation time so the
/// render passes never parse color strings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    /// Red component (0.0 to 1.0).
    pub r: f32,
    /// Green component (0.0 to 1.0).
    pub g: f32,
    /// Blue component (0.0 to 1.0).
    pub b: f32,
}

impl Color {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };
    /// White (1, 1, 1).
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0 };

    /// Create a new color from RGB values (0.0-1.0).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color with all components set to the same value.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Create from a hex integer (0xRRGGBB).
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Convert to hex integer.
    pub fn to_hex(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0) as u32;
        (r << 16) | (g << 8) | b
    }

    /// Create from RGB bytes (0-255).
    pub fn from_rgb_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to RGB bytes.
    pub fn to_rgb_bytes(&self) -> [u8; 3] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }

    /// Brighten by adding a byte-scale amount to every channel, clamped to
    /// white. Planet shading uses this for the lit limb.
    pub fn lighter(&self, amount: u8) -> Self {
        let delta = amount as f32 / 255.0;
        Self {
            r: (self.r + delta).min(1.0),
            g: (self.g + delta).min(1.0),
            b: (self.b + delta).min(1.0),
        }
    }

    /// Darken by subtracting a byte-scale amount from every channel, clamped
    /// to black. Planet shading uses this for the shadowed limb.
    pub fn darker(&self, amount: u8) -> Self {
        let delta = amount as f32 / 255.0;
        Self {
            r: (self.r - delta).max(0.0),
            g: (self.g - delta).max(0.0),
            b: (self.b - delta).max(0.0),
        }
    }

    /// Multiply by a scalar.
    #[inline]
    pub fn multiply_scalar(&self, s: f32) -> Self {
        Self {
            r: self.r * s,
            g: self.g * s,
            b: self.b * s,
        }
    }

    /// Linear interpolation.
    #[inline]
    pub fn lerp(&self, other: &Color, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Get luminance (perceived brightness).
    #[inline]
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// Clamp all components to 0.0-1.0.
    #[inline]
    pub fn clamp(&self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
        }
    }

    /// Check if approximately equal.
    #[inline]
    pub fn approx_eq(&self, other: &Color, epsilon: f32) -> bool {
        (self.r - other.r).abs() < epsilon
            && (self.g - other.g).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl From<[f32; 3]> for Color {
    fn from(a: [f32; 3]) -> Self {
        Self { r: a[0], g: a[1], b: a[2] }
    }
}

impl From<Color> for [f32; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl From<u32> for Color {
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl std::ops::Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            r: self.r + rhs.r,
            g: self.g + rhs.g,
            b: self.b + rhs.b,
        }
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        self.multiply_scalar(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_roundtrip() {
        let c = Color::from_hex(0x4169E1);
        assert_eq!(c.to_hex(), 0x4169E1);
    }

    #[test]
    fn test_lighter_clamps_to_white() {
        let c = Color::from_hex(0xF0F0F0).lighter(50);
        assert_eq!(c.to_rgb_bytes(), [255, 255, 255]);
    }

    #[test]
    fn test_darker_clamps_to_black() {
        let c = Color::from_hex(0x101010).darker(50);
        assert_eq!(c.to_rgb_bytes(), [0, 0, 0]);
    }

    #[test]
    fn test_lighter_offsets_channels() {
        let c = Color::from_rgb_bytes(100, 120, 140).lighter(50);
        let [r, g, b] = c.to_rgb_bytes();
        assert_eq!(r, 150);
        assert_eq!(g, 170);
        assert_eq!(b, 190);
    }
}
