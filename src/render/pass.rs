//! Base layer pass trait for the frame pipeline.

use super::draw::DrawList;
use crate::camera::{CameraState, Projection, Projector};
use crate::math::{Vector2, Vector3};
use crate::scene::SceneData;

/// Per-frame inputs shared by every pass.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Elapsed track time in seconds.
    pub time: f32,
    /// Beat pulse in `[0, 1]`, 1 on the beat.
    pub pulse: f32,
    /// Camera state for this frame.
    pub camera: CameraState,
    /// Camera brightness with the beat pulse applied.
    pub pulse_brightness: f32,
    /// Projector configured for this engine.
    pub projector: Projector,
    /// Square viewport size in pixels.
    pub viewport: f32,
    /// Viewport center in pixels.
    pub center: Vector2,
}

impl FrameContext {
    /// Project a world point with this frame's camera.
    #[inline]
    pub fn project(&self, position: &Vector3) -> Option<Projection> {
        self.projector
            .project(position, self.camera.depth, self.viewport)
    }
}

/// A layer pass in the frame pipeline.
pub trait LayerPass {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Check if this pass is enabled.
    fn enabled(&self) -> bool {
        true
    }

    /// Set whether this pass is enabled.
    fn set_enabled(&mut self, enabled: bool);

    /// Whether the pass draws anything at this point in the track.
    /// Enabled passes outside their activation window are skipped.
    fn active(&self, ctx: &FrameContext) -> bool {
        let _ = ctx;
        true
    }

    /// Append this pass's commands for the frame.
    ///
    /// # Arguments
    /// * `ctx` - Shared per-frame inputs
    /// * `scene` - Generated world content, read-only
    /// * `out` - Draw list to append to
    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CameraTimeline;

    fn context_at(time: f32) -> FrameContext {
        let timeline = CameraTimeline::default();
        let camera = timeline.sample(time);
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
    fn test_context_projection_uses_camera_depth() {
        let ctx = context_at(20.0);
        // Verse 1 at t=20: depth 240 + 12*100 = 1440.
        let ahead = Vector3::new(0.0, 0.0, ctx.camera.depth + 600.0);
        let proj = ctx.project(&ahead).unwrap();
        assert!((proj.depth - 600.0).abs() < 1e-3);
        assert!((proj.scale - 1.0).abs() < 1e-3);
        let behind = Vector3::new(0.0, 0.0, ctx.camera.depth - 50.0);
        assert!(ctx.project(&behind).is_none());
    }
}
