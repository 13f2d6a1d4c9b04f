//! Playback transport: state machine and time origin.

use serde::{Deserialize, Serialize};

/// Playback state of the flythrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Not playing; the idle starfield is shown.
    #[default]
    Idle,
    /// The flythrough is running.
    Playing,
    /// The track just ended; collapses to Idle on the next advance.
    Finished,
}

/// Result of advancing the transport by one host frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playhead {
    /// Elapsed track time in seconds (0 when not playing).
    pub elapsed: f64,
    /// True exactly once, on the frame the track end is crossed.
    pub finished: bool,
}

/// Owns the playback state and the wall-clock origin of the current run.
///
/// The host supplies monotonic timestamps (seconds); the transport never
/// reads a clock itself, which keeps the engine schedulable from any loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transport {
    state: PlaybackState,
    origin: f64,
}

impl Transport {
    /// Create a new transport in the idle state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Whether the flythrough is currently running.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Begin playback, anchoring elapsed time to `now`.
    pub fn start(&mut self, now: f64) {
        self.state = PlaybackState::Playing;
        self.origin = now;
        log::info!("transport started");
    }

    /// Stop playback and return to idle.
    pub fn reset(&mut self) {
        if self.state != PlaybackState::Idle {
            log::info!("transport reset");
        }
        self.state = PlaybackState::Idle;
        self.origin = 0.0;
    }

    /// Elapsed track time at `now`, in seconds. Zero unless playing.
    pub fn elapsed(&self, now: f64) -> f64 {
        match self.state {
            PlaybackState::Playing => (now - self.origin).max(0.0),
            _ => 0.0,
        }
    }

    /// Advance to `now`, handling the end-of-track transition.
    ///
    /// Crossing `duration` moves Playing to Finished and reports the
    /// finished edge exactly once; the following advance collapses
    /// Finished to Idle. Elapsed time resets to zero at the edge.
    pub fn advance(&mut self, now: f64, duration: f64) -> Playhead {
        match self.state {
            PlaybackState::Idle => Playhead {
                elapsed: 0.0,
                finished: false,
            },
            PlaybackState::Finished => {
                self.state = PlaybackState::Idle;
                self.origin = 0.0;
                Playhead {
                    elapsed: 0.0,
                    finished: false,
                }
            }
            PlaybackState::Playing => {
                let elapsed = (now - self.origin).max(0.0);
                if elapsed >= duration {
                    self.state = PlaybackState::Finished;
                    log::info!("transport finished after {:.1}s", duration);
                    Playhead {
                        elapsed: 0.0,
                        finished: true,
                    }
                } else {
                    Playhead {
                        elapsed,
                        finished: false,
                    }
                }
            }
        }
    }
}
