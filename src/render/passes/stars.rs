//! Star layer rendering.

use crate::render::draw::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
use crate::render::pass::{FrameContext, LayerPass};
use crate::scene::{SceneData, StarLayer};

/// Stars dimmer than this are not worth a gradient.
const OPACITY_FLOOR: f32 = 0.02;

/// Track time at which the backdrop layer becomes visible.
pub const BACKDROP_REVEAL: f32 = 60.0;

/// Which generated layer a pass draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarLayerKind {
    /// Distant tinted layer.
    Far,
    /// Mid-distance layer.
    Mid,
    /// Close layer.
    Near,
    /// Deep layer revealed mid-track.
    Backdrop,
}

/// Tuning for one star layer pass.
#[derive(Debug, Clone, Copy)]
pub struct StarFieldSettings {
    /// Multiplier on projected scale inside the opacity term.
    pub opacity_gain: f32,
    /// Upper bound on the scale-driven opacity term.
    pub opacity_cap: f32,
    /// Smallest drawn core size in pixels.
    pub size_floor: f32,
    /// How strongly the beat pulse swells star size.
    pub pulse_gain: f32,
    /// Halo radius as a multiple of core size.
    pub halo_scale: f32,
    /// Offset of the middle gradient stop.
    pub halo_stop: f32,
    /// Opacity fraction at the middle stop.
    pub halo_alpha: f32,
    /// Track time before which the pass stays dark, if any.
    pub reveal_at: Option<f32>,
}

/// Renders one star layer as pulse-swollen gradient discs.
pub struct StarFieldPass {
    enabled: bool,
    name: &'static str,
    kind: StarLayerKind,
    settings: StarFieldSettings,
}

impl StarFieldPass {
    /// The far layer: small halos, subtle pulse.
    pub fn far() -> Self {
        Self {
            enabled: true,
            name: "Far Stars",
            kind: StarLayerKind::Far,
            settings: StarFieldSettings {
                opacity_gain: 0.25,
                opacity_cap: 0.5,
                size_floor: 0.25,
                pulse_gain: 0.15,
                halo_scale: 1.5,
                halo_stop: 0.5,
                halo_alpha: 0.25,
                reveal_at: None,
            },
        }
    }

    /// The mid layer.
    pub fn mid() -> Self {
        Self {
            enabled: true,
            name: "Mid Stars",
            kind: StarLayerKind::Mid,
            settings: StarFieldSettings {
                opacity_gain: 0.3,
                opacity_cap: 0.6,
                size_floor: 0.35,
                pulse_gain: 0.2,
                halo_scale: 2.0,
                halo_stop: 0.4,
                halo_alpha: 0.35,
                reveal_at: None,
            },
        }
    }

    /// The near layer: largest halos, strongest pulse.
    pub fn near() -> Self {
        Self {
            enabled: true,
            name: "Near Stars",
            kind: StarLayerKind::Near,
            settings: StarFieldSettings {
                opacity_gain: 0.4,
                opacity_cap: 0.75,
                size_floor: 0.4,
                pulse_gain: 0.3,
                halo_scale: 2.5,
                halo_stop: 0.35,
                halo_alpha: 0.4,
                reveal_at: None,
            },
        }
    }

    /// The backdrop layer, held back until [`BACKDROP_REVEAL`].
    pub fn backdrop() -> Self {
        Self {
            enabled: true,
            name: "Backdrop Stars",
            kind: StarLayerKind::Backdrop,
            settings: StarFieldSettings {
                opacity_gain: 0.35,
                opacity_cap: 0.6,
                size_floor: 0.3,
                pulse_gain: 0.25,
                halo_scale: 2.0,
                halo_stop: 0.4,
                halo_alpha: 0.35,
                reveal_at: Some(BACKDROP_REVEAL),
            },
        }
    }

    /// Get settings.
    pub fn settings(&self) -> &StarFieldSettings {
        &self.settings
    }

    /// Set settings.
    pub fn set_settings(&mut self, settings: StarFieldSettings) {
        self.settings = settings;
    }

    fn layer<'a>(&self, scene: &'a SceneData) -> &'a StarLayer {
        match self.kind {
            StarLayerKind::Far => scene.far(),
            StarLayerKind::Mid => scene.mid(),
            StarLayerKind::Near => scene.near(),
            StarLayerKind::Backdrop => scene.backdrop(),
        }
    }
}

impl LayerPass for StarFieldPass {
    fn name(&self) -> &str {
        self.name
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn active(&self, ctx: &FrameContext) -> bool {
        match self.settings.reveal_at {
            Some(at) => ctx.time >= at,
            None => true,
        }
    }

    fn render(&self, ctx: &FrameContext, scene: &SceneData, out: &mut DrawList) {
        let s = &self.settings;
        for star in self.layer(scene).stars() {
            let Some(proj) = ctx.project(&star.position) else {
                continue;
            };
            let opacity = star.brightness
                * ctx.pulse_brightness
                * ctx.camera.fade
                * (proj.scale * s.opacity_gain).min(s.opacity_cap);
            if opacity < OPACITY_FLOOR {
                continue;
            }
            let size = s
                .size_floor
                .max(star.size * proj.scale * (1.0 + ctx.pulse * s.pulse_gain));
            let halo = size * s.halo_scale;
            let grad = RadialGradient::new(proj.screen, 0.0, halo)
                .stop(0.0, Rgba::new(star.color, opacity))
                .stop(s.halo_stop, Rgba::new(star.color, opacity * s.halo_alpha))
                .stop(1.0, Rgba::new(star.color, 0.0));
            out.push(DrawCmd::Disc {
                center: proj.screen,
                radius: halo,
                fill: Fill::Radial(grad),
                blend: BlendMode::SourceOver,
            });
        }
    }
}
