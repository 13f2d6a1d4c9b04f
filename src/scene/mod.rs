//! # Scene Module
//!
//! Procedural scene content: the four star layers, nebula clouds,
//! spiral galaxies and the solar system table. Everything is generated
//! once from a seed; playback never mutates the scene.

pub mod galaxy;
pub mod nebula;
pub mod planets;
pub mod starfield;

pub use galaxy::{Galaxy, GALAXY_COUNT};
pub use nebula::{Nebula, NEBULA_COUNT};
pub use planets::{Planet, EARTH_INDEX, PLANETS, SUN_DEPTH};
pub use starfield::{Star, StarLayer, StarLayerSettings};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// All generated world content for one flythrough.
#[derive(Debug, Clone)]
pub struct SceneData {
    far: StarLayer,
    mid: StarLayer,
    near: StarLayer,
    backdrop: StarLayer,
    nebulae: Vec<Nebula>,
    galaxies: Vec<Galaxy>,
    seed: u64,
}

impl SceneData {
    /// Generate the full scene from a seed. The same seed always yields
    /// the same scene.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let far = StarLayer::spawn(&mut rng, &StarLayerSettings::far());
        let mid = StarLayer::spawn(&mut rng, &StarLayerSettings::mid());
        let near = StarLayer::spawn(&mut rng, &StarLayerSettings::near());
        let backdrop = StarLayer::spawn(&mut rng, &StarLayerSettings::backdrop());
        let nebulae = nebula::spawn_field(&mut rng);
        let galaxies = galaxy::spawn_field(&mut rng);
        let scene = Self {
            far,
            mid,
            near,
            backdrop,
            nebulae,
            galaxies,
            seed,
        };
        log::info!(
            "scene generated: {} stars, {} nebulae, {} galaxies (seed {})",
            scene.star_count(),
            scene.nebulae.len(),
            scene.galaxies.len(),
            seed
        );
        scene
    }

    /// Generate a scene from system entropy.
    pub fn generate_random() -> Self {
        Self::generate(rand::rng().random())
    }

    /// The distant tinted star layer.
    #[inline]
    pub fn far(&self) -> &StarLayer {
        &self.far
    }

    /// The mid-distance star layer.
    #[inline]
    pub fn mid(&self) -> &StarLayer {
        &self.mid
    }

    /// The close star layer.
    #[inline]
    pub fn near(&self) -> &StarLayer {
        &self.near
    }

    /// The deep backdrop layer revealed late in the track.
    #[inline]
    pub fn backdrop(&self) -> &StarLayer {
        &self.backdrop
    }

    /// All nebula clouds.
    #[inline]
    pub fn nebulae(&self) -> &[Nebula] {
        &self.nebulae
    }

    /// All spiral galaxies.
    #[inline]
    pub fn galaxies(&self) -> &[Galaxy] {
        &self.galaxies
    }

    /// Seed this scene was generated from.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total number of stars across all four layers.
    pub fn star_count(&self) -> usize {
        self.far.len() + self.mid.len() + self.near.len() + self.backdrop.len()
    }
}
