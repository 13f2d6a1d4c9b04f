//! Beat-synced center glow.

use crate::camera::VERSE_1_START;
use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Energy level the track must reach before the glow shows.
const ENERGY_THRESHOLD: f32 = 0.5;

/// A soft pulse of light at the viewport center during high-energy
/// sections, breathing with the beat.
pub struct CenterGlowPass {
    enabled: bool,
}

impl CenterGlowPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for CenterGlowPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for CenterGlowPass {
    fn name(&self) -> &str {
        "Center Glow"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn active(&self, ctx: &FrameContext) -> bool {
        ctx.camera.energy > ENERGY_THRESHOLD && ctx.time > VERSE_1_START
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        let size = ctx.viewport * 0.15 * (1.0 + ctx.pulse * 0.3);
        let alpha = ctx.pulse * 0.08 * ctx.camera.energy * ctx.camera.fade;
        let grad = RadialGradient::new(ctx.center, 0.0, size)
            .stop(0.0, Rgba::from_bytes(150, 180, 255, alpha))
            .stop(1.0, Rgba::from_bytes(150, 180, 255, 0.0));
        out.push(DrawCmd::Disc {
            center: ctx.center,
            radius: size,
            fill: Fill::Radial(grad),
            blend: BlendMode::Screen,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraTimeline, Projector};
    use crate::math::Vector2;

    fn context_at(time: f32, pulse: f32) -> FrameContext {
        let camera = CameraTimeline::default().sample(time);
        FrameContext {
            time,
            pulse,
            camera,
            pulse_brightness: camera.pulse_brightness(pulse),
            projector: Projector::default(),
            viewport: 800.0,
            center: Vector2::splat(400.0),
        }
    }

    #[test]
    fn test_needs_energy_and_time() {
        let pass = CenterGlowPass::new();
        // Intro is low-energy and too early.
        assert!(!pass.active(&context_at(4.0, 1.0)));
        // Verse 1 energy tops out at 0.5, still below threshold.
        assert!(!pass.active(&context_at(30.0, 1.0)));
        // Both choruses clear it.
        assert!(pass.active(&context_at(60.0, 1.0)));
        assert!(pass.active(&context_at(120.0, 1.0)));
    }

    #[test]
    fn test_glow_breathes_with_pulse() {
        let scene = SceneData::generate(7);
        let pass = CenterGlowPass::new();
        let mut on_beat = DrawList::new();
        let mut off_beat = DrawList::new();
        pass.render(&context_at(100.0, 1.0), &scene, &mut on_beat);
        pass.render(&context_at(100.0, 0.0), &scene, &mut off_beat);
        let radius = |list: &DrawList| match &list.commands()[0] {
            DrawCmd::Disc { radius, .. } => *radius,
            other => panic!("unexpected command {:?}", other),
        };
        assert!((radius(&on_beat) - 800.0 * 0.15 * 1.3).abs() < 1e-3);
        assert!((radius(&off_beat) - 800.0 * 0.15).abs() < 1e-3);
    }
}
