//! # Core Module
//!
//! Engine entry point, tempo clock, playback transport and configuration.

mod engine;
mod clock;
mod transport;

pub use engine::{Engine, EngineBuilder, FrameOutput};
pub use clock::{BeatClock, BEATS_PER_BAR};
pub use transport::{Playhead, PlaybackState, Transport};

use crate::camera::FADE_OUT_START;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when engine configuration is rejected.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Tempo was not a positive, finite BPM value.
    #[error("tempo must be a positive, finite BPM (got {0})")]
    InvalidTempo(f32),

    /// Track duration was not finite or too short for the section layout.
    #[error("track duration must be finite and exceed {min}s (got {got})")]
    InvalidDuration {
        /// Rejected duration in seconds.
        got: f32,
        /// Minimum supported duration (the final section boundary).
        min: f32,
    },

    /// Focal length was not a positive, finite value.
    #[error("focal length must be positive and finite (got {0})")]
    InvalidFocalLength(f32),

    /// Near plane was not a positive, finite value.
    #[error("near plane must be positive and finite (got {0})")]
    InvalidNearPlane(f32),

    /// Viewport size was zero.
    #[error("viewport size must be at least 1 pixel")]
    InvalidViewport,
}

/// Engine configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Track tempo in beats per minute.
    pub bpm: f32,
    /// Track duration in seconds.
    pub track_duration: f32,
    /// Projector focal length in pixels.
    pub focal_length: f32,
    /// Near clipping depth; points closer than this are culled.
    pub near_plane: f32,
    /// Square viewport size in pixels.
    pub viewport: u32,
    /// Seed for scene generation. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bpm: 119.0,
            track_duration: 161.0,
            focal_length: 600.0,
            near_plane: 10.0,
            viewport: 800,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Validate all fields, rejecting non-finite or out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(ConfigError::InvalidTempo(self.bpm));
        }
        if !self.track_duration.is_finite() || self.track_duration <= FADE_OUT_START {
            return Err(ConfigError::InvalidDuration {
                got: self.track_duration,
                min: FADE_OUT_START,
            });
        }
        if !self.focal_length.is_finite() || self.focal_length <= 0.0 {
            return Err(ConfigError::InvalidFocalLength(self.focal_length));
        }
        if !self.near_plane.is_finite() || self.near_plane <= 0.0 {
            return Err(ConfigError::InvalidNearPlane(self.near_plane));
        }
        if self.viewport == 0 {
            return Err(ConfigError::InvalidViewport);
        }
        Ok(())
    }
}

/// Format elapsed seconds as a `mm:ss` timestamp for display.
pub fn format_timestamp(seconds: f32) -> String {
    let total = seconds.max(0.0) as u32;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_tempo() {
        let mut config = EngineConfig::default();
        config.bpm = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTempo(_))));
        config.bpm = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTempo(_))));
    }

    #[test]
    fn test_rejects_short_duration() {
        let mut config = EngineConfig::default();
        config.track_duration = 100.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_rejects_nonfinite_projection() {
        let mut config = EngineConfig::default();
        config.focal_length = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFocalLength(_))
        ));

        let mut config = EngineConfig::default();
        config.near_plane = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNearPlane(_))
        ));
    }

    #[test]
    fn test_rejects_zero_viewport() {
        let mut config = EngineConfig::default();
        config.viewport = 0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidViewport)));
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0.0), "00:00");
        assert_eq!(format_timestamp(65.4), "01:05");
        assert_eq!(format_timestamp(161.0), "02:41");
        assert_eq!(format_timestamp(-3.0), "00:00");
    }
}
