//! Earth closeup during the second chorus.

use crate::camera::CHORUS_2_START;
use crate::math::{Color, Easing, Vector2};
use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Track time at which continents fade in.
const CONTINENTS_FROM: f32 = 105.0;
/// Track time at which clouds fade in.
const CLOUDS_FROM: f32 = 110.0;
/// Continent fill color.
const LAND_COLOR: u32 = 0x2d6a30;

/// Renders the growing Earth: atmosphere shells, shaded sphere,
/// drifting continents, orbiting clouds and a specular highlight.
pub struct EarthClosePass {
    enabled: bool,
}

impl EarthClosePass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for EarthClosePass {
    fn default() -> Self {
        Self::new()
    }
}

/// Growth envelope of the closeup: linear approach, hold at full size,
/// eased pull-back, then a settled fraction through the fade-out.
fn growth_phase(t: f32) -> f32 {
    if t < 115.0 {
        (t - CHORUS_2_START) / 20.0
    } else if t < 130.0 {
        1.0
    } else if t < 145.0 {
        1.0 - Easing::Smooth.apply((t - 130.0) / 15.0) * 0.7
    } else {
        0.3
    }
}

impl LayerPass for EarthClosePass {
    fn name(&self) -> &str {
        "Earth Closeup"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn active(&self, ctx: &FrameContext) -> bool {
        ctx.time >= CHORUS_2_START
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        let t = ctx.time;
        let opacity =
            ctx.camera.fade * Easing::Smooth.apply(((t - CHORUS_2_START) / 5.0).min(1.0));
        let progress = Easing::Smoother.apply(growth_phase(t));
        let radius = ctx.viewport * (0.08 + progress * 0.35);
        if opacity <= 0.0 || radius <= 5.0 {
            return;
        }
        let center = ctx.center;
        let beat = 1.0 + ctx.pulse * 0.03 * ctx.camera.energy;

        // Atmosphere shells, outermost first.
        for a in (0..6).rev() {
            let shell = (radius + 8.0 + a as f32 * 6.0) * beat;
            let alpha = opacity * 0.15 * (1.0 - a as f32 * 0.15);
            let grad = RadialGradient::new(center, radius * 0.9, shell)
                .stop(0.0, Rgba::from_bytes(100, 180, 255, alpha))
                .stop(1.0, Rgba::from_bytes(100, 180, 255, 0.0));
            out.push(DrawCmd::Disc {
                center,
                radius: shell,
                fill: Fill::Radial(grad),
                blend: BlendMode::SourceOver,
            });
        }

        let sphere = RadialGradient::new(center - Vector2::splat(radius * 0.3), 0.0, radius * 1.3)
            .stop(0.0, Rgba::from_bytes(80, 140, 200, opacity))
            .stop(0.5, Rgba::from_bytes(40, 100, 170, opacity))
            .stop(1.0, Rgba::from_bytes(20, 60, 120, opacity));
        out.push(DrawCmd::Disc {
            center,
            radius: radius * beat,
            fill: Fill::Radial(sphere),
            blend: BlendMode::SourceOver,
        });

        if t >= CONTINENTS_FROM {
            let detail = Easing::Smooth.apply(((t - CONTINENTS_FROM) / 10.0).min(1.0)) * opacity;
            let drift = (t * 0.02).cos();
            let land = Rgba::new(Color::from_hex(LAND_COLOR), detail * 0.7);
            let masses = [
                (drift * 0.2, -0.15, 0.18, 0.35, 0.2),
                (-drift * 0.25, 0.05, 0.15, 0.3, -0.1),
                (-drift * 0.5, -0.1, 0.22, 0.2, 0.3),
            ];
            for (dx, dy, rx, ry, rotation) in masses {
                out.push(DrawCmd::Ellipse {
                    center: center + Vector2::new(dx * radius, dy * radius),
                    rx: rx * radius,
                    ry: ry * radius,
                    rotation,
                    fill: Fill::Solid(land),
                    blend: BlendMode::SourceOver,
                });
            }
        }

        if t >= CLOUDS_FROM {
            let cloud_alpha =
                Easing::Smooth.apply(((t - CLOUDS_FROM) / 8.0).min(1.0)) * opacity * 0.5;
            let swirl = t * 0.03;
            for c in 0..8 {
                let cf = c as f32;
                let cloud = center
                    + Vector2::new(
                        (swirl + cf * 0.8).cos() * radius * 0.5,
                        (swirl * 0.7 + cf * 1.2).sin() * radius * 0.4,
                    );
                out.push(DrawCmd::Disc {
                    center: cloud,
                    radius: radius * (0.06 + (cf * 2.5).sin() * 0.02),
                    fill: Fill::Solid(Rgba::white(cloud_alpha)),
                    blend: BlendMode::SourceOver,
                });
            }
        }

        let highlight = RadialGradient::new(center - Vector2::splat(radius * 0.35), 0.0, radius * 0.4)
            .stop(0.0, Rgba::white(opacity * 0.25))
            .stop(1.0, Rgba::white(0.0));
        out.push(DrawCmd::Disc {
            center,
            radius: radius * beat,
            fill: Fill::Radial(highlight),
            blend: BlendMode::SourceOver,
        });
    }
}
