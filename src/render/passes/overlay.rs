//! Frame-level overlays: the fade-to-black layer and the viewport ring.

use crate::math::Color;
use crate::render::draw::{DrawCmd, DrawList, Fill, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Near-black tint of the fade layer, matching the intro sky.
const FADE_TINT: (u8, u8, u8) = (0, 0, 6);

/// Composites darkness over everything while the camera fade is below 1,
/// carrying the intro fade-in and the final fade-out.
pub struct FadeOverlayPass {
    enabled: bool,
}

impl FadeOverlayPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for FadeOverlayPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for FadeOverlayPass {
    fn name(&self) -> &str {
        "Fade Overlay"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn active(&self, ctx: &FrameContext) -> bool {
        ctx.camera.fade < 1.0
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        let (r, g, b) = FADE_TINT;
        out.push(DrawCmd::Overlay {
            fill: Fill::Solid(Rgba::from_bytes(r, g, b, 1.0 - ctx.camera.fade)),
        });
    }
}

/// A faint decorative ring at the viewport edge.
pub struct FrameRingPass {
    enabled: bool,
}

impl FrameRingPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for FrameRingPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for FrameRingPass {
    fn name(&self) -> &str {
        "Frame Ring"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        out.push(DrawCmd::CircleStroke {
            center: ctx.center,
            radius: ctx.viewport * 0.48,
            color: Rgba::new(Color::WHITE, 0.04),
            width: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraTimeline, Projector};
    use crate::math::Vector2;

    fn context_at(time: f32) -> FrameContext {
        let camera = CameraTimeline::default().sample(time);
        FrameContext {
            time,
            pulse: 0.0,
            camera,
            pulse_brightness: camera.pulse_brightness(0.0),
            projector: Projector::default(),
            viewport: 800.0,
            center: Vector2::splat(400.0),
        }
    }

    #[test]
    fn test_fade_overlay_only_during_fades() {
        let pass = FadeOverlayPass::new();
        assert!(pass.active(&context_at(2.0)));
        assert!(!pass.active(&context_at(50.0)));
        assert!(!pass.active(&context_at(120.0)));
        assert!(pass.active(&context_at(155.0)));
    }

    #[test]
    fn test_fade_overlay_strength() {
        let scene = SceneData::generate(9);
        let pass = FadeOverlayPass::new();
        let ctx = context_at(2.0);
        let mut out = DrawList::new();
        pass.render(&ctx, &scene, &mut out);
        let DrawCmd::Overlay {
            fill: Fill::Solid(color),
        } = &out.commands()[0]
        else {
            panic!("fade emits a solid overlay");
        };
        assert!((color.alpha - (1.0 - ctx.camera.fade)).abs() < 1e-6);
        assert!(color.alpha > 0.0 && color.alpha < 1.0);
    }

    #[test]
    fn test_ring_geometry() {
        let scene = SceneData::generate(9);
        let pass = FrameRingPass::new();
        let mut out = DrawList::new();
        pass.render(&context_at(50.0), &scene, &mut out);
        let DrawCmd::CircleStroke {
            radius,
            color,
            width,
            ..
        } = &out.commands()[0]
        else {
            panic!("ring emits a circle stroke");
        };
        assert_eq!(*radius, 384.0);
        assert_eq!(*width, 1.0);
        assert!((color.alpha - 0.04).abs() < 1e-6);
    }
}
