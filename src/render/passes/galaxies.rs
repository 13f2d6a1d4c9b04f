//! Spiral galaxy rendering.

use crate::math::{consts, Vector2};
use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::SceneData;

/// Projected galaxies smaller than this stay as plain glow-free space.
const SIZE_FLOOR: f32 = 8.0;
/// Number of spiral arms per galaxy.
const ARM_COUNT: usize = 3;
/// Vertices per arm polyline.
const ARM_POINTS: usize = 50;
/// Winding step between consecutive arm vertices, in radians.
const ARM_TWIST: f32 = 0.08;
/// Arm reach as a fraction of the projected disc radius.
const ARM_REACH: f32 = 0.85;

/// Renders the galaxies as a core glow plus three wound arm strokes.
pub struct GalaxyPass {
    enabled: bool,
}

impl GalaxyPass {
    /// Create the pass.
    pub fn new() -> Self {
        Self { enabled: true }
    }
}

impl Default for GalaxyPass {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerPass for GalaxyPass {
    fn name(&self) -> &str {
        "Galaxies"
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        for galaxy in scene.galaxies() {
            let Some(proj) = ctx.project(&galaxy.position) else {
                continue;
            };
            let size = galaxy.size * proj.scale;
            if size < SIZE_FLOOR {
                continue;
            }
            let opacity = ctx.pulse_brightness * ctx.camera.fade * 0.15 * proj.scale.min(0.4);
            let glow = RadialGradient::new(proj.screen, 0.0, size)
                .stop(0.0, Rgba::from_bytes(200, 180, 230, opacity))
                .stop(0.5, Rgba::from_bytes(160, 140, 200, opacity * 0.35))
                .stop(1.0, Rgba::from_bytes(120, 100, 160, 0.0));
            out.push(DrawCmd::Disc {
                center: proj.screen,
                radius: size,
                fill: Fill::Radial(glow),
                blend: BlendMode::Screen,
            });

            let spin = galaxy.spin(ctx.time);
            let arm_color = Rgba::from_bytes(180, 160, 210, opacity * 0.4);
            let width = (size * 0.025).max(0.5);
            for arm in 0..ARM_COUNT {
                let base = spin + arm as f32 * consts::TWO_PI / ARM_COUNT as f32;
                let mut points = Vec::with_capacity(ARM_POINTS);
                for i in 0..ARM_POINTS {
                    let angle = base + i as f32 * ARM_TWIST;
                    let dist = (i as f32 / ARM_POINTS as f32) * size * ARM_REACH;
                    points.push(Vector2::new(
                        proj.screen.x + angle.cos() * dist,
                        proj.screen.y + angle.sin() * dist * 0.5,
                    ));
                }
                out.push(DrawCmd::Polyline {
                    points,
                    color: arm_color,
                    width,
                    blend: BlendMode::Screen,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraTimeline, Projector};

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
    fn test_each_drawn_galaxy_gets_core_and_arms() {
        let scene = SceneData::generate(4);
        let pass = GalaxyPass::new();
        let mut out = DrawList::new();
        pass.render(&context_at(30.0), &scene, &mut out);
        let discs = out
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Disc { .. }))
            .count();
        let arms = out
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::Polyline { .. }))
            .count();
        assert_eq!(arms, discs * ARM_COUNT);
        for cmd in out.commands() {
            if let DrawCmd::Polyline { points, width, .. } = cmd {
                assert_eq!(points.len(), ARM_POINTS);
                assert!(*width >= 0.5);
            }
        }
    }

    #[test]
    fn test_arms_rotate_over_time() {
        let scene = SceneData::generate(4);
        let pass = GalaxyPass::new();
        let mut early = DrawList::new();
        let mut late = DrawList::new();
        pass.render(&context_at(20.0), &scene, &mut early);
        pass.render(&context_at(21.0), &scene, &mut late);
        let first_arm = |list: &DrawList| -> Option<Vector2> {
            list.commands().iter().find_map(|c| match c {
                // Vertex 0 sits at the core; vertex 1 shows the spin.
                DrawCmd::Polyline { points, .. } => Some(points[1]),
                _ => None,
            })
        };
        let (a, b) = (first_arm(&early), first_arm(&late));
        if let (Some(a), Some(b)) = (a, b) {
            assert!(!a.approx_eq(&b, 1e-6));
        }
    }
}
