//! Tempo-locked clock for beat-synchronized animation.

use serde::{Deserialize, Serialize};

/// Beats per bar of the tempo grid.
pub const BEATS_PER_BAR: f32 = 4.0;

/// A clock that maps elapsed track time onto a musical tempo grid.
///
/// The clock is stateless: every query is a pure function of the elapsed
/// time passed in, so frames can be rendered out of order or scrubbed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeatClock {
    /// Tempo in beats per minute.
    bpm: f32,
    /// Seconds per beat (60 / bpm).
    beat_duration: f32,
}

impl BeatClock {
    /// Create a new beat clock for the given tempo.
    ///
    /// The tempo must be positive; engine configuration validates this
    /// before construction.
    pub fn new(bpm: f32) -> Self {
        debug_assert!(bpm > 0.0);
        Self {
            bpm,
            beat_duration: 60.0 / bpm,
        }
    }

    /// Tempo in beats per minute.
    #[inline]
    pub fn bpm(&self) -> f32 {
        self.bpm
    }

    /// Duration of one beat in seconds.
    #[inline]
    pub fn beat_duration(&self) -> f32 {
        self.beat_duration
    }

    /// Normalized position within the current beat, in `[0, 1)`.
    #[inline]
    pub fn beat_progress(&self, elapsed: f32) -> f32 {
        elapsed.rem_euclid(self.beat_duration) / self.beat_duration
    }

    /// Beat pulse intensity, in `[0, 1]`.
    ///
    /// Spikes to 1.0 at the start of every beat and decays cubically to 0
    /// as the beat progresses, giving a sharp attack with a soft tail.
    #[inline]
    pub fn pulse(&self, elapsed: f32) -> f32 {
        let decay = 1.0 - self.beat_progress(elapsed);
        decay * decay * decay
    }

    /// Normalized position within the current four-beat bar, in `[0, 1)`.
    ///
    /// Available for bar-level effects; the stock layer passes only consume
    /// [`pulse`](Self::pulse).
    #[inline]
    pub fn bar_progress(&self, elapsed: f32) -> f32 {
        let bar = self.beat_duration * BEATS_PER_BAR;
        elapsed.rem_euclid(bar) / bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beat_duration() {
        let clock = BeatClock::new(120.0);
        assert!((clock.beat_duration() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_peaks_on_the_beat() {
        let clock = BeatClock::new(119.0);
        assert!((clock.pulse(0.0) - 1.0).abs() < 1e-6);
        assert!((clock.pulse(clock.beat_duration()) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_pulse_in_unit_range() {
        let clock = BeatClock::new(119.0);
        for i in 0..1000 {
            let t = i as f32 * 0.173;
            let p = clock.pulse(t);
            assert!((0.0..=1.0).contains(&p), "pulse {} out of range at t={}", p, t);
        }
    }

    #[test]
    fn test_pulse_periodic() {
        let clock = BeatClock::new(119.0);
        let bd = clock.beat_duration();
        for i in 0..50 {
            let t = i as f32 * 0.091;
            assert!((clock.pulse(t) - clock.pulse(t + bd)).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pulse_decays_within_beat() {
        let clock = BeatClock::new(119.0);
        let bd = clock.beat_duration();
        let mut prev = clock.pulse(0.0);
        for i in 1..100 {
            // Stay strictly inside one beat so the wrap never appears.
            let t = bd * (i as f32 / 100.5);
            let p = clock.pulse(t);
            assert!(p <= prev + 1e-6, "pulse rose within a beat at t={}", t);
            prev = p;
        }
    }

    #[test]
    fn test_bar_progress_wraps_every_four_beats() {
        let clock = BeatClock::new(120.0);
        let bar = clock.beat_duration() * BEATS_PER_BAR;
        assert!(clock.bar_progress(0.0).abs() < 1e-6);
        assert!((clock.bar_progress(bar * 0.5) - 0.5).abs() < 1e-6);
        assert!(clock.bar_progress(bar) < 1e-5);
    }
}
