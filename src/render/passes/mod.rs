//! The layer passes of the flythrough pipeline, one file per effect.

mod earth;
mod galaxies;
mod glow;
mod nebulae;
mod overlay;
mod solar;
mod stars;
mod vignette;

pub use earth::EarthClosePass;
pub use galaxies::GalaxyPass;
pub use glow::CenterGlowPass;
pub use nebulae::NebulaPass;
pub use overlay::{FadeOverlayPass, FrameRingPass};
pub use solar::SolarSystemPass;
pub use stars::{StarFieldPass, StarFieldSettings, StarLayerKind, BACKDROP_REVEAL};
pub use vignette::{VignettePass, VignetteSettings};
