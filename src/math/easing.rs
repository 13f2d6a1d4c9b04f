//! Easing functions for flight choreography.

/// Easing curves applied to normalized phase progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing, linear progression.
    #[default]
    Linear,
    /// Cubic ease out - fast start, slow settle.
    CubicOut,
    /// Cubic ease in/out - slow start and end.
    CubicInOut,
    /// Smoothstep - the classic cubic Hermite blend.
    Smooth,
    /// Smootherstep - quintic blend, flatter at both edges.
    Smoother,
}

impl Easing {
    /// Apply the easing function to a normalized time value (0-1).
    ///
    /// Inputs are clamped to the unit interval first so callers can feed raw
    /// phase progress without guarding the edges.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Smooth => t * t * (3.0 - 2.0 * t),
            Easing::Smoother => t * t * t * (t * (t * 6.0 - 15.0) + 10.0),
        }
    }
}
