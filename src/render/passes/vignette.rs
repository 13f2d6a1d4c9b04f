//! Vignette overlay effect.

use crate::render::draw::{DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Vignette settings.
#[derive(Debug, Clone, Copy)]
pub struct VignetteSettings {
    /// Untouched radius as a fraction of the viewport size.
    pub inner_ratio: f32,
    /// Radius of full darkening as a fraction of the viewport size.
    pub outer_ratio: f32,
    /// Darkening at the middle stop.
    pub mid_opacity: f32,
    /// Darkening at the rim.
    pub edge_opacity: f32,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            inner_ratio: 0.3,
            outer_ratio: 0.52,
            mid_opacity: 0.15,
            edge_opacity: 0.5,
        }
    }
}

/// Darkens the viewport rim, always drawn.
pub struct VignettePass {
    enabled: bool,
    settings: VignetteSettings,
}

impl VignettePass {
    /// Create the pass with default settings.
    pub fn new() -> Self {
        Self {
            enabled: true,
            settings: VignetteSettings::default(),
        }
    }

    /// Get settings.
    pub fn settings(&self) -> &VignetteSettings {
        &self.settings
    }

    /// Set settings.
    pub fn set_settings(&mut self, settings: VignetteSettings) {
        self.settings = settings;
    }

    /// Set the rim darkening.
    pub fn set_edge_opacity(&mut self, opacity: f32) {
        self.settings.edge_opacity = opacity.clamp(0.0, 1.0);
    }
}

impl Default for VignettePass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for VignettePass {
    fn name(&self) -> &str {
        "Vignette"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        let s = &self.settings;
        let grad = RadialGradient::new(
            ctx.center,
            ctx.viewport * s.inner_ratio,
            ctx.viewport * s.outer_ratio,
        )
        .stop(0.0, Rgba::TRANSPARENT)
        .stop(0.6, Rgba::TRANSPARENT.with_alpha(s.mid_opacity))
        .stop(1.0, Rgba::TRANSPARENT.with_alpha(s.edge_opacity));
        out.push(DrawCmd::Overlay {
            fill: Fill::Radial(grad),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraTimeline, Projector};
    use crate::math::Vector2;

    #[test]
    fn test_always_one_overlay() {
        let scene = SceneData::generate(8);
        let pass = VignettePass::new();
        let camera = CameraTimeline::default().sample(50.0);
        let ctx = FrameContext {
            time: 50.0,
            pulse: 0.3,
            camera,
            pulse_brightness: camera.pulse_brightness(0.3),
            projector: Projector::default(),
            viewport: 800.0,
            center: Vector2::splat(400.0),
        };
        let mut out = DrawList::new();
        pass.render(&ctx, &scene, &mut out);
        assert_eq!(out.len(), 1);
        let DrawCmd::Overlay {
            fill: Fill::Radial(grad),
        } = &out.commands()[0]
        else {
            panic!("vignette emits a radial overlay");
        };
        assert_eq!(grad.inner_radius, 240.0);
        assert_eq!(grad.radius, 416.0);
        assert_eq!(grad.stops[0].color.alpha, 0.0);
        assert_eq!(grad.stops[2].color.alpha, 0.5);
    }
}
