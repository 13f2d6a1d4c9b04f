//! Fixed-order frame pipeline.

use super::draw::{DrawCmd, DrawList};
use super::pass::{FrameContext, LayerPass};
use super::passes::{
    CenterGlowPass, EarthClosePass, FadeOverlayPass, FrameRingPass, GalaxyPass, NebulaPass,
    SolarSystemPass, StarFieldPass, VignettePass,
};
use crate::math::Color;
use crate::scene::SceneData;

/// Background color of active playback frames.
pub const ACTIVE_BACKGROUND: u32 = 0x000006;

/// Ordered chain of layer passes producing one frame's draw list.
///
/// Order is depth order back to front, then the screen-space layers:
/// distant content draws first so closer layers composite over it, and
/// the vignette, fade and ring close every frame.
pub struct RenderPipeline {
    passes: Vec<Box<dyn LayerPass>>,
}

impl RenderPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// Create the standard flythrough pipeline.
    pub fn flythrough() -> Self {
        let mut pipeline = Self::new();
        pipeline.add_pass(Box::new(NebulaPass::new()));
        pipeline.add_pass(Box::new(GalaxyPass::new()));
        pipeline.add_pass(Box::new(StarFieldPass::far()));
        pipeline.add_pass(Box::new(StarFieldPass::mid()));
        pipeline.add_pass(Box::new(StarFieldPass::near()));
        pipeline.add_pass(Box::new(StarFieldPass::backdrop()));
        pipeline.add_pass(Box::new(SolarSystemPass::new()));
        pipeline.add_pass(Box::new(EarthClosePass::new()));
        pipeline.add_pass(Box::new(CenterGlowPass::new()));
        pipeline.add_pass(Box::new(VignettePass::new()));
        pipeline.add_pass(Box::new(FadeOverlayPass::new()));
        pipeline.add_pass(Box::new(FrameRingPass::new()));
        pipeline
    }

    /// Add a pass to the end of the chain.
    pub fn add_pass(&mut self, pass: Box<dyn LayerPass>) {
        self.passes.push(pass);
    }

    /// Remove a pass by name.
    pub fn remove_pass(&mut self, name: &str) -> Option<Box<dyn LayerPass>> {
        self.passes
            .iter()
            .position(|p| p.name() == name)
            .map(|idx| self.passes.remove(idx))
    }

    /// Get a pass by name.
    pub fn get_pass(&self, name: &str) -> Option<&dyn LayerPass> {
        self.passes
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Enable or disable a pass by name. Returns false when no pass
    /// carries the name.
    pub fn set_pass_enabled(&mut self, name: &str, enabled: bool) -> bool {
        match self.passes.iter_mut().find(|p| p.name() == name) {
            Some(pass) => {
                pass.set_enabled(enabled);
                true
            }
            None => false,
        }
    }

    /// Names of all passes in chain order.
    pub fn pass_names(&self) -> Vec<&str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    /// Render one frame: a clear plus every enabled pass inside its
    /// activation window, in chain order.
    pub fn render(&self, ctx: &FrameContext, scene: &SceneData) -> DrawList {
        let mut out = DrawList::new();
        out.push(DrawCmd::Clear {
            color: Color::from_hex(ACTIVE_BACKGROUND),
        });
        for pass in &self.passes {
            if pass.enabled() && pass.active(ctx) {
                pass.render(ctx, scene, &mut out);
            }
        }
        out
    }
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::flythrough()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{CameraTimeline, Projector};
    use crate::math::Vector2;
    use crate::render::draw::{BlendMode, Fill, RadialGradient};

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
    fn test_flythrough_pass_order() {
        let pipeline = RenderPipeline::flythrough();
        assert_eq!(
            pipeline.pass_names(),
            vec![
                "Nebulae",
                "Galaxies",
                "Far Stars",
                "Mid Stars",
                "Near Stars",
                "Backdrop Stars",
                "Solar System",
                "Earth Closeup",
                "Center Glow",
                "Vignette",
                "Fade Overlay",
                "Frame Ring",
            ]
        );
    }

    #[test]
    fn test_frame_starts_with_clear_and_ends_with_ring() {
        let scene = SceneData::generate(11);
        let pipeline = RenderPipeline::flythrough();
        let out = pipeline.render(&context_at(50.0), &scene);
        assert!(matches!(
            out.commands().first(),
            Some(DrawCmd::Clear { .. })
        ));
        assert!(matches!(
            out.commands().last(),
            Some(DrawCmd::CircleStroke { .. })
        ));
        assert!(out.len() > 100);
    }

    #[test]
    fn test_disabled_pass_is_skipped() {
        let scene = SceneData::generate(11);
        let mut pipeline = RenderPipeline::flythrough();
        let ctx = context_at(50.0);
        let full = pipeline.render(&ctx, &scene).len();
        assert!(pipeline.set_pass_enabled("Vignette", false));
        let trimmed = pipeline.render(&ctx, &scene).len();
        assert_eq!(trimmed, full - 1);
        assert!(!pipeline.set_pass_enabled("No Such Pass", false));
    }

    #[test]
    fn test_remove_pass() {
        let mut pipeline = RenderPipeline::flythrough();
        assert!(pipeline.remove_pass("Center Glow").is_some());
        assert!(pipeline.get_pass("Center Glow").is_none());
        assert!(pipeline.remove_pass("Center Glow").is_none());
        assert_eq!(pipeline.pass_names().len(), 11);
    }

    fn check_gradient(grad: &RadialGradient) {
        assert!(grad.radius > 0.0);
        assert!(grad.inner_radius >= 0.0);
        for stop in &grad.stops {
            assert!((0.0..=1.0).contains(&stop.offset));
            assert!((0.0..=1.0).contains(&stop.color.alpha));
        }
    }

    fn check_fill(fill: &Fill) {
        match fill {
            Fill::Solid(color) => assert!((0.0..=1.0).contains(&color.alpha)),
            Fill::Radial(grad) => check_gradient(grad),
        }
    }

    #[test]
    fn test_frame_geometry_invariants() {
        // Every layer is live at t=120: backdrop, solar system, earth
        // closeup and glow are all inside their windows.
        let scene = SceneData::generate(11);
        let pipeline = RenderPipeline::flythrough();
        let out = pipeline.render(&context_at(120.0), &scene);
        assert!(out.len() > 100);
        for cmd in out.commands() {
            match cmd {
                DrawCmd::Clear { .. } => {}
                DrawCmd::Disc { radius, fill, .. } => {
                    assert!(*radius > 0.0);
                    check_fill(fill);
                }
                DrawCmd::Ellipse { rx, ry, fill, .. } => {
                    assert!(*rx > 0.0 && *ry > 0.0);
                    check_fill(fill);
                }
                DrawCmd::EllipseStroke { rx, ry, width, .. } => {
                    assert!(*rx > 0.0 && *ry > 0.0);
                    assert!(*width > 0.0);
                }
                DrawCmd::CircleStroke { radius, width, .. } => {
                    assert!(*radius > 0.0);
                    assert!(*width > 0.0);
                }
                DrawCmd::Polyline { points, width, .. } => {
                    assert!(points.len() >= 2);
                    assert!(*width > 0.0);
                }
                DrawCmd::Overlay { fill } => check_fill(fill),
            }
        }
    }

    #[test]
    fn test_screen_blend_confined_to_glow_layers() {
        let scene = SceneData::generate(11);
        let ctx = context_at(120.0);

        // The full frame carries additive content somewhere.
        let pipeline = RenderPipeline::flythrough();
        let blend_of = |cmd: &DrawCmd| match cmd {
            DrawCmd::Disc { blend, .. }
            | DrawCmd::Ellipse { blend, .. }
            | DrawCmd::Polyline { blend, .. } => Some(*blend),
            _ => None,
        };
        let full = pipeline.render(&ctx, &scene);
        assert!(full
            .commands()
            .iter()
            .any(|c| blend_of(c) == Some(BlendMode::Screen)));

        // With the luminous layers off, nothing else screen-blends.
        let mut dimmed = RenderPipeline::flythrough();
        for name in ["Nebulae", "Galaxies", "Solar System", "Center Glow"] {
            assert!(dimmed.set_pass_enabled(name, false));
        }
        let rest = dimmed.render(&ctx, &scene);
        for cmd in rest.commands() {
            if let Some(blend) = blend_of(cmd) {
                assert_eq!(blend, BlendMode::SourceOver);
            }
        }
    }

    #[test]
    fn test_early_frame_has_no_solar_content() {
        let scene = SceneData::generate(11);
        let pipeline = RenderPipeline::flythrough();
        // At t=20 the solar, earth, glow and backdrop passes are all
        // outside their windows; the frame is stars and nebulae only.
        let out = pipeline.render(&context_at(20.0), &scene);
        let ellipse_strokes = out
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCmd::EllipseStroke { .. }))
            .count();
        assert_eq!(ellipse_strokes, 0);
    }
}
