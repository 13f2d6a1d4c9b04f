//! Idle backdrop rendered before playback starts.

use super::draw::{BlendMode, DrawCmd, DrawList, Fill, Rgba};
use crate::camera::Projector;
use crate::math::Color;
use crate::scene::SceneData;

/// Background color of the idle frame.
pub const IDLE_BACKGROUND: u32 = 0x000008;
/// How many stars the idle frame draws.
pub const IDLE_STAR_BUDGET: usize = 3000;
/// Brightness multiplier relative to normal playback.
const IDLE_DIMMING: f32 = 0.3;

/// Render the dim static pre-start frame.
///
/// Uses exactly the first [`IDLE_STAR_BUDGET`] stars of the combined
/// far and mid layers, projected from camera depth 0, independent of
/// any playback state.
pub fn render_idle(scene: &SceneData, projector: &Projector, viewport: f32) -> DrawList {
    let mut out = DrawList::new();
    out.push(DrawCmd::Clear {
        color: Color::from_hex(IDLE_BACKGROUND),
    });
    let stars = scene
        .far()
        .stars()
        .iter()
        .chain(scene.mid().stars())
        .take(IDLE_STAR_BUDGET);
    for star in stars {
        let Some(proj) = projector.project(&star.position, 0.0, viewport) else {
            continue;
        };
        out.push(DrawCmd::Disc {
            center: proj.screen,
            radius: (star.size * proj.scale * 0.3).max(0.3),
            fill: Fill::Solid(Rgba::white(star.brightness * IDLE_DIMMING)),
            blend: BlendMode::SourceOver,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame_is_static() {
        let scene = SceneData::generate(10);
        let projector = Projector::default();
        let a = render_idle(&scene, &projector, 800.0);
        let b = render_idle(&scene, &projector, 800.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_idle_frame_shape() {
        let scene = SceneData::generate(10);
        let out = render_idle(&scene, &Projector::default(), 800.0);
        let DrawCmd::Clear { color } = &out.commands()[0] else {
            panic!("idle frame starts with a clear");
        };
        assert_eq!(color.to_hex(), IDLE_BACKGROUND);
        // Never more discs than the budget; far stars sit beyond the
        // near plane so most of the slice survives projection.
        let discs = out.len() - 1;
        assert!(discs <= IDLE_STAR_BUDGET);
        assert!(discs > IDLE_STAR_BUDGET / 2);
        for cmd in &out.commands()[1..] {
            let DrawCmd::Disc { radius, fill, .. } = cmd else {
                panic!("idle frame draws plain discs");
            };
            assert!(*radius >= 0.3);
            let Fill::Solid(color) = fill else {
                panic!("idle stars are flat fills");
            };
            assert!(color.alpha <= 0.5 * IDLE_DIMMING + 1e-6);
        }
    }
}
