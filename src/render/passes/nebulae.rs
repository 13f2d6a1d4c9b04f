//! Nebula cloud rendering.

use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Projected clouds smaller than this are skipped.
const SIZE_FLOOR: f32 = 3.0;
/// Clouds fainter than this are skipped.
const OPACITY_FLOOR: f32 = 0.005;
/// Upper bound on the scale-driven opacity term.
const SCALE_CAP: f32 = 0.6;

/// Renders the nebula field as screen-blended gradient discs.
pub struct NebulaPass {
    enabled: bool,
}

impl NebulaPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for NebulaPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for NebulaPass {
    fn name(&self) -> &str {
        "Nebulae"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        for nebula in scene.nebulae() {
            let Some(proj) = ctx.project(&nebula.position) else {
                continue;
            };
            let size = nebula.size * proj.scale;
            if size < SIZE_FLOOR {
                continue;
            }
            let opacity = nebula.opacity
                * ctx.pulse_brightness
                * ctx.camera.fade
                * proj.scale.min(SCALE_CAP);
            if opacity < OPACITY_FLOOR {
                continue;
            }
            let grad = RadialGradient::new(proj.screen, 0.0, size)
                .stop(0.0, Rgba::new(nebula.color, opacity))
                .stop(0.4, Rgba::new(nebula.color, opacity * 0.3))
                .stop(1.0, Rgba::new(nebula.color, 0.0));
            out.push(DrawCmd::Disc {
                center: proj.screen,
                radius: size,
                fill: Fill::Radial(grad),
                blend: BlendMode::Screen,
            });
        }
    }
}
