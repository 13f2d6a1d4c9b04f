//! Sun, planets, rings and the moon.

use crate::camera::CHORUS_1_START;
use crate::math::{Vector2, Vector3};
use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::{SceneData, EARTH_INDEX, PLANETS, SUN_DEPTH};

/// Track time after which the solar system stops rendering.
const WINDOW_END: f32 = 140.0;
/// Seconds the solar system takes to fade in after its window opens.
const FADE_IN: f32 = 4.0;
/// Sun radius in world units before perspective scaling.
const SUN_BASE_SIZE: f32 = 60.0;
/// Planets projected smaller than this are skipped.
const PLANET_SIZE_FLOOR: f32 = 1.5;
/// Track time at which Earth's moon appears.
const MOON_VISIBLE_FROM: f32 = 80.0;
/// Moon orbital speed in radians per second.
const MOON_SPEED: f32 = 2.5;

/// Renders the sun's corona, the eight planets, Saturn's ring and
/// Earth's moon during the mid-track window.
pub struct SolarSystemPass {
    enabled: bool,
}

impl SolarSystemPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for SolarSystemPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for SolarSystemPass {
    fn name(&self) -> &str {
        "Solar System"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn active(&self, ctx: &FrameContext) -> bool {
        ctx.time >= CHORUS_1_START && ctx.time < WINDOW_END
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let _ = scene;
        let solar = ((ctx.time - CHORUS_1_START) / FADE_IN).min(1.0) * ctx.camera.fade;
        let Some(sun) = ctx.project(&Vector3::new(0.0, 0.0, SUN_DEPTH)) else {
            return;
        };
        if solar <= 0.0 {
            return;
        }

        let sun_size = SUN_BASE_SIZE * sun.scale * (1.0 + ctx.pulse * 0.1 * ctx.camera.energy);
        // Outermost corona ring first so the core draws on top.
        for i in (0..5).rev() {
            let ring = sun_size * (1.0 + i as f32 * 0.65);
            let intensity = solar * (1.0 - i as f32 * 0.15) * 0.5;
            let grad = RadialGradient::new(sun.screen, 0.0, ring)
                .stop(0.0, Rgba::from_bytes(255, 245, 200, intensity))
                .stop(0.3, Rgba::from_bytes(255, 200, 100, intensity * 0.5))
                .stop(0.7, Rgba::from_bytes(255, 150, 50, intensity * 0.2))
                .stop(1.0, Rgba::from_bytes(255, 100, 0, 0.0));
            out.push(DrawCmd::Disc {
                center: sun.screen,
                radius: ring,
                fill: Fill::Radial(grad),
                blend: BlendMode::Screen,
            });
        }

        for (index, planet) in PLANETS.iter().enumerate() {
            let Some(proj) = ctx.project(&planet.position(ctx.time, index)) else {
                continue;
            };
            let ps = planet.radius * proj.scale;
            if ps < PLANET_SIZE_FLOOR {
                continue;
            }
            let base = planet.base_color();
            let alpha = solar * 0.8;
            // Gradient center offset toward the light gives the limb shading.
            let shaded = RadialGradient::new(proj.screen - Vector2::splat(ps * 0.3), 0.0, ps * 1.3)
                .stop(0.0, Rgba::new(base.lighter(50), alpha))
                .stop(0.5, Rgba::new(base, alpha))
                .stop(1.0, Rgba::new(base.darker(50), alpha));
            out.push(DrawCmd::Disc {
                center: proj.screen,
                radius: ps,
                fill: Fill::Radial(shaded),
                blend: BlendMode::SourceOver,
            });

            if planet.ringed {
                out.push(DrawCmd::EllipseStroke {
                    center: proj.screen,
                    rx: ps * 2.2,
                    ry: ps * 0.6,
                    rotation: 0.3,
                    color: Rgba::from_bytes(210, 190, 160, solar * 0.5),
                    width: (ps * 0.15).max(1.5),
                });
            }

            if index == EARTH_INDEX && ctx.time >= MOON_VISIBLE_FROM {
                let moon_angle = ctx.time * MOON_SPEED;
                let center = proj.screen
                    + Vector2::new(
                        moon_angle.cos() * ps * 2.5,
                        moon_angle.sin() * ps * 2.5 * 0.4,
                    );
                out.push(DrawCmd::Disc {
                    center,
                    radius: ps * 0.28,
                    fill: Fill::Solid(Rgba::from_bytes(180, 180, 190, solar * 0.7)),
                    blend: BlendMode::SourceOver,
                });
            }
        }
    }
}
