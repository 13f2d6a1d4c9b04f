//! Main engine entry point.

use super::{BeatClock, ConfigError, EngineConfig, PlaybackState, Transport};
use crate::camera::{CameraTimeline, Phase, Projector};
use crate::math::Vector2;
use crate::render::{render_idle, DrawList, FrameContext, RenderPipeline};
use crate::scene::SceneData;

/// Everything a host needs from one transport-driven frame.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    /// Commands to execute on the 2D surface.
    pub draw: DrawList,
    /// Track section at this frame, for display.
    pub phase: Phase,
    /// Elapsed track time in seconds (0 when idle).
    pub elapsed: f32,
    /// True exactly once, on the frame the track end is crossed.
    pub finished: bool,
}

/// The flythrough engine.
///
/// Owns the generated scene, the beat clock, the flight timeline, the
/// playback transport and the layer pipeline. Rendering is a pure
/// function of elapsed time: [`tick`](Self::tick) produces the frame
/// for any time without touching playback state, which is what makes
/// the flythrough scrubbable. Hosts that want the engine to keep time
/// drive [`frame`](Self::frame) with monotonic timestamps instead.
pub struct Engine {
    scene: SceneData,
    clock: BeatClock,
    timeline: CameraTimeline,
    projector: Projector,
    transport: Transport,
    pipeline: RenderPipeline,
    viewport: u32,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine from the default configuration.
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine from a validated configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scene = match config.seed {
            Some(seed) => SceneData::generate(seed),
            None => SceneData::generate_random(),
        };
        log::info!(
            "engine ready: {:.0} BPM, {:.0}s track, {} px viewport",
            config.bpm,
            config.track_duration,
            config.viewport
        );
        Ok(Self {
            scene,
            clock: BeatClock::new(config.bpm),
            timeline: CameraTimeline::new(config.track_duration),
            projector: Projector::new(config.focal_length, config.near_plane),
            transport: Transport::new(),
            pipeline: RenderPipeline::flythrough(),
            viewport: config.viewport,
            config,
        })
    }

    /// The generated scene content.
    #[inline]
    pub fn scene(&self) -> &SceneData {
        &self.scene
    }

    /// The beat clock.
    #[inline]
    pub fn clock(&self) -> &BeatClock {
        &self.clock
    }

    /// The flight timeline.
    #[inline]
    pub fn timeline(&self) -> &CameraTimeline {
        &self.timeline
    }

    /// The configured projector.
    #[inline]
    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// The layer pipeline, for toggling passes.
    #[inline]
    pub fn pipeline_mut(&mut self) -> &mut RenderPipeline {
        &mut self.pipeline
    }

    /// The configuration this engine was built from.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current playback state.
    #[inline]
    pub fn playback_state(&self) -> PlaybackState {
        self.transport.state()
    }

    /// Whether the flythrough is running.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    /// Current square viewport size in pixels.
    #[inline]
    pub fn viewport(&self) -> u32 {
        self.viewport
    }

    /// Update the viewport size. Zero is ignored; the next frame
    /// projects against the new size.
    pub fn set_viewport(&mut self, size: u32) {
        if size > 0 && size != self.viewport {
            self.viewport = size;
        }
    }

    /// Begin playback, anchoring elapsed time to `now` (seconds).
    pub fn start(&mut self, now: f64) {
        self.transport.start(now);
    }

    /// Stop playback and return to the idle backdrop.
    pub fn reset(&mut self) {
        self.transport.reset();
    }

    /// Section label for an elapsed time, for display.
    #[inline]
    pub fn phase_label(&self, elapsed: f32) -> &'static str {
        self.timeline.label_at(elapsed)
    }

    /// Elapsed track time at the given host timestamp.
    #[inline]
    pub fn elapsed(&self, now: f64) -> f32 {
        self.transport.elapsed(now) as f32
    }

    /// Render the frame for an arbitrary elapsed time.
    ///
    /// Pure: playback state is neither read nor touched, so any time
    /// can be rendered in any order. Non-finite or negative times
    /// render the start-of-track frame.
    pub fn tick(&self, elapsed: f32) -> DrawList {
        let t = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };
        let ctx = self.frame_context(t);
        self.pipeline.render(&ctx, &self.scene)
    }

    /// Render the dim static backdrop shown before playback.
    pub fn idle_frame(&self) -> DrawList {
        render_idle(&self.scene, &self.projector, self.viewport as f32)
    }

    /// Advance the transport to `now` and render the resulting frame.
    ///
    /// While idle this returns the idle backdrop; crossing the track
    /// end reports `finished` once and falls back to the backdrop.
    pub fn frame(&mut self, now: f64) -> FrameOutput {
        let head = self
            .transport
            .advance(now, self.config.track_duration as f64);
        let elapsed = head.elapsed as f32;
        let draw = if self.transport.is_playing() {
            self.tick(elapsed)
        } else {
            self.idle_frame()
        };
        let phase = if self.transport.state() == PlaybackState::Idle && !head.finished {
            self.timeline.phase_at(0.0)
        } else if head.finished {
            Phase::Complete
        } else {
            self.timeline.phase_at(elapsed)
        };
        FrameOutput {
            draw,
            phase,
            elapsed,
            finished: head.finished,
        }
    }

    fn frame_context(&self, time: f32) -> FrameContext {
        let camera = self.timeline.sample(time);
        let pulse = self.clock.pulse(time);
        let viewport = self.viewport as f32;
        FrameContext {
            time,
            pulse,
            camera,
            pulse_brightness: camera.pulse_brightness(pulse),
            projector: self.projector,
            viewport,
            center: Vector2::splat(viewport * 0.5),
        }
    }
}

/// Builder for configuring the engine.
pub struct EngineBuilder {
    config: EngineConfig,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the track tempo in beats per minute.
    pub fn bpm(mut self, bpm: f32) -> Self {
        self.config.bpm = bpm;
        self
    }

    /// Set the track duration in seconds.
    pub fn track_duration(mut self, seconds: f32) -> Self {
        self.config.track_duration = seconds;
        self
    }

    /// Set the projector focal length in pixels.
    pub fn focal_length(mut self, pixels: f32) -> Self {
        self.config.focal_length = pixels;
        self
    }

    /// Set the near clipping depth in world units.
    pub fn near_plane(mut self, depth: f32) -> Self {
        self.config.near_plane = depth;
        self
    }

    /// Set the square viewport size in pixels.
    pub fn viewport(mut self, size: u32) -> Self {
        self.config.viewport = size;
        self
    }

    /// Seed scene generation for a reproducible flythrough.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Build the engine.
    pub fn build(self) -> Result<Engine, ConfigError> {
        Engine::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::DrawCmd;

    fn engine() -> Engine {
        EngineBuilder::new().seed(7).build().unwrap()
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        assert!(EngineBuilder::new().bpm(-10.0).build().is_err());
        assert!(EngineBuilder::new().track_duration(60.0).build().is_err());
        assert!(EngineBuilder::new().viewport(0).build().is_err());
    }

    #[test]
    fn test_tick_is_pure_and_seekable() {
        let engine = engine();
        let late = engine.tick(100.0);
        let early = engine.tick(20.0);
        // Rendering out of order changes nothing.
        assert_eq!(engine.tick(100.0), late);
        assert_eq!(engine.tick(20.0), early);
        assert_ne!(late, early);
    }

    #[test]
    fn test_bad_elapsed_renders_track_start() {
        let engine = engine();
        let origin = engine.tick(0.0);
        assert_eq!(engine.tick(-5.0), origin);
        assert_eq!(engine.tick(f32::NAN), origin);
        assert_eq!(engine.tick(f32::INFINITY), origin);
    }

    #[test]
    fn test_idle_until_started() {
        let mut engine = engine();
        let out = engine.frame(1000.0);
        assert_eq!(out.elapsed, 0.0);
        assert!(!out.finished);
        assert_eq!(out.draw, engine.idle_frame());
    }

    #[test]
    fn test_frame_advances_with_host_time() {
        let mut engine = engine();
        engine.start(50.0);
        let out = engine.frame(90.0);
        assert!((out.elapsed - 40.0).abs() < 1e-4);
        assert_eq!(out.phase, Phase::Chorus1);
        assert_eq!(out.draw, engine.tick(40.0));
    }

    #[test]
    fn test_finished_edge_fires_once_then_idle() {
        let mut engine = engine();
        engine.start(0.0);
        let edge = engine.frame(161.0);
        assert!(edge.finished);
        assert_eq!(edge.phase, Phase::Complete);
        assert_eq!(edge.elapsed, 0.0);

        let after = engine.frame(162.0);
        assert!(!after.finished);
        assert_eq!(engine.playback_state(), PlaybackState::Idle);
        assert_eq!(after.draw, engine.idle_frame());
    }

    #[test]
    fn test_idle_frame_ignores_playback_history() {
        let mut engine = engine();
        let before = engine.idle_frame();
        engine.start(0.0);
        engine.frame(100.0);
        engine.reset();
        assert_eq!(engine.idle_frame(), before);
    }

    #[test]
    fn test_viewport_resize_applies_next_tick() {
        let mut engine = engine();
        let at_800 = engine.tick(50.0);
        engine.set_viewport(400);
        assert_eq!(engine.viewport(), 400);
        assert_ne!(engine.tick(50.0), at_800);
        // Zero is ignored.
        engine.set_viewport(0);
        assert_eq!(engine.viewport(), 400);
    }

    #[test]
    fn test_active_frame_clears_to_space_black() {
        let engine = engine();
        let out = engine.tick(10.0);
        assert!(matches!(out.commands()[0], DrawCmd::Clear { .. }));
        assert!(out.len() > 100);
    }

    #[test]
    fn test_phase_labels_via_engine() {
        let engine = engine();
        assert_eq!(engine.phase_label(0.0), "Intro");
        assert_eq!(engine.phase_label(40.0), "Chorus 1");
        assert_eq!(engine.phase_label(100.0), "Chorus 2");
        assert_eq!(engine.phase_label(150.0), "Fade Out");
        assert_eq!(engine.phase_label(161.0), "Complete");
    }
}
