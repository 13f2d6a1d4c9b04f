//! Flight timeline: track sections and camera choreography.

use crate::math::{consts, Easing};
use serde::{Deserialize, Serialize};

/// Start of the first verse, in seconds.
pub const VERSE_1_START: f32 = 8.0;
/// Start of the first chorus, in seconds.
pub const CHORUS_1_START: f32 = 35.0;
/// Start of the second verse, in seconds.
pub const VERSE_2_START: f32 = 65.0;
/// Start of the second chorus, in seconds.
pub const CHORUS_2_START: f32 = 95.0;
/// Start of the outro pull-back, in seconds.
pub const OUTRO_START: f32 = 130.0;
/// Start of the final fade to black, in seconds.
pub const FADE_OUT_START: f32 = 145.0;

/// Track section of the flythrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Fade in from black, slow drift forward.
    Intro,
    /// Steady cruise through the near starfield.
    Verse1,
    /// Eased acceleration into deep space.
    Chorus1,
    /// Slow reflective drift past the nebulae.
    Verse2,
    /// Final acceleration toward the solar system.
    Chorus2,
    /// Pull back from the planets.
    Outro,
    /// Fade to black over the last bars.
    FadeOut,
    /// Past the end of the track.
    Complete,
}

impl Phase {
    /// Human-readable section label.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Intro => "Intro",
            Phase::Verse1 => "Verse 1",
            Phase::Chorus1 => "Chorus 1",
            Phase::Verse2 => "Verse 2",
            Phase::Chorus2 => "Chorus 2",
            Phase::Outro => "Outro",
            Phase::FadeOut => "Fade Out",
            Phase::Complete => "Complete",
        }
    }
}

/// Ordered section table. Each entry is a phase and its start time; a
/// phase ends where the next begins, and the last runs to track end.
const SEGMENTS: [(Phase, f32); 7] = [
    (Phase::Intro, 0.0),
    (Phase::Verse1, VERSE_1_START),
    (Phase::Chorus1, CHORUS_1_START),
    (Phase::Verse2, VERSE_2_START),
    (Phase::Chorus2, CHORUS_2_START),
    (Phase::Outro, OUTRO_START),
    (Phase::FadeOut, FADE_OUT_START),
];

/// Camera parameters for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraState {
    /// Camera depth along the flight axis, in world units.
    pub depth: f32,
    /// Global fade multiplier in `[0, 1]`; 0 is fully black.
    pub fade: f32,
    /// Base brightness multiplier for all layers.
    pub brightness: f32,
    /// Musical energy level driving pulse amplitude and the ambient glow.
    pub energy: f32,
}

impl CameraState {
    /// Brightness with the beat pulse applied, scaled by energy.
    #[inline]
    pub fn pulse_brightness(&self, pulse: f32) -> f32 {
        self.brightness * (1.0 + pulse * 0.08 * self.energy)
    }
}

/// Maps elapsed track time to camera state and section labels.
///
/// Every per-phase curve meets its neighbors at the shared boundary, so
/// depth, fade, brightness and energy are continuous across the whole
/// track. [`sample_phase`](Self::sample_phase) exposes the per-phase
/// evaluation, which makes that property directly checkable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraTimeline {
    /// Track duration in seconds. The fade-out spans
    /// `[FADE_OUT_START, duration)`.
    duration: f32,
}

impl CameraTimeline {
    /// Create a timeline for a track of the given duration.
    ///
    /// The duration must exceed [`FADE_OUT_START`]; engine configuration
    /// validates this before construction.
    pub fn new(duration: f32) -> Self {
        debug_assert!(duration > FADE_OUT_START);
        Self { duration }
    }

    /// Track duration in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Section containing the given elapsed time.
    pub fn phase_at(&self, elapsed: f32) -> Phase {
        if elapsed >= self.duration {
            return Phase::Complete;
        }
        let elapsed = elapsed.max(0.0);
        SEGMENTS
            .iter()
            .rev()
            .find(|(_, start)| elapsed >= *start)
            .map(|(phase, _)| *phase)
            .unwrap_or(Phase::Intro)
    }

    /// Section label for the given elapsed time.
    #[inline]
    pub fn label_at(&self, elapsed: f32) -> &'static str {
        self.phase_at(elapsed).label()
    }

    /// Camera state at the given elapsed time.
    pub fn sample(&self, elapsed: f32) -> CameraState {
        self.sample_phase(self.phase_at(elapsed), elapsed)
    }

    /// Evaluate one phase's curves at a global elapsed time.
    ///
    /// The time is not required to lie inside the phase; progress is
    /// clamped. Evaluating the two phases that meet at a boundary must
    /// produce matching states.
    pub fn sample_phase(&self, phase: Phase, elapsed: f32) -> CameraState {
        let t = elapsed.max(0.0);
        match phase {
            Phase::Intro => {
                let fade = Easing::Smooth.apply(t / VERSE_1_START);
                CameraState {
                    depth: t * 30.0,
                    fade,
                    brightness: fade * 0.6,
                    energy: 0.2 + fade * 0.1,
                }
            }
            Phase::Verse1 => {
                let lt = t - VERSE_1_START;
                let p = (lt / (CHORUS_1_START - VERSE_1_START)).clamp(0.0, 1.0);
                CameraState {
                    depth: 240.0 + lt * 100.0,
                    fade: 1.0,
                    brightness: 0.6 + p * 0.1,
                    energy: 0.3 + p * 0.2,
                }
            }
            Phase::Chorus1 => {
                let lt = t - CHORUS_1_START;
                let span = VERSE_2_START - CHORUS_1_START;
                let p = Easing::CubicInOut.apply(lt / span);
                let shimmer = (lt * 0.3).sin() * 0.05 * taper(lt / span);
                CameraState {
                    depth: 2940.0 + p * 2000.0,
                    fade: 1.0,
                    brightness: 0.7 + p * 0.05 + shimmer,
                    energy: 0.5 + p * 0.15,
                }
            }
            Phase::Verse2 => {
                let lt = t - VERSE_2_START;
                CameraState {
                    depth: 4940.0 + lt * 35.0,
                    fade: 1.0,
                    brightness: 0.75,
                    energy: 0.65,
                }
            }
            Phase::Chorus2 => {
                let lt = t - CHORUS_2_START;
                let span = OUTRO_START - CHORUS_2_START;
                let p = Easing::Smoother.apply(lt / span);
                let shimmer = (lt * 0.4).sin() * 0.08 * taper(lt / span);
                CameraState {
                    depth: 5990.0 + p * 1500.0,
                    fade: 1.0,
                    brightness: 0.75 + p * 0.05 + shimmer,
                    energy: 0.65 + p * 0.25,
                }
            }
            Phase::Outro => {
                let lt = t - OUTRO_START;
                let p = Easing::Smooth.apply(lt / (FADE_OUT_START - OUTRO_START));
                CameraState {
                    depth: 7490.0 - p * 2500.0,
                    fade: 1.0,
                    brightness: 0.8 - p * 0.1,
                    energy: 0.9 - p * 0.6,
                }
            }
            Phase::FadeOut => {
                let lt = t - FADE_OUT_START;
                let span = self.duration - FADE_OUT_START;
                let fade = 1.0 - Easing::Smoother.apply(lt / span);
                CameraState {
                    depth: 4990.0,
                    fade,
                    brightness: 0.7 * fade,
                    energy: 0.3 * fade,
                }
            }
            Phase::Complete => CameraState::default(),
        }
    }
}

impl Default for CameraTimeline {
    fn default() -> Self {
        Self::new(161.0)
    }
}

/// Oscillation window: zero at both phase edges, peaking mid-phase.
/// Keeps the chorus shimmer from breaking boundary continuity.
#[inline]
fn taper(p: f32) -> f32 {
    (consts::PI * p.clamp(0.0, 1.0)).sin()
}
