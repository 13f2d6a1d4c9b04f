//! Camera system: the beat-driven flight timeline and the perspective
//! projector that maps world points onto the viewport.

pub mod projector;
pub mod timeline;

pub use projector::{Projection, Projector, DEFAULT_FOCAL_LENGTH, DEFAULT_NEAR_PLANE};
pub use timeline::{
    CameraState, CameraTimeline, Phase, CHORUS_1_START, CHORUS_2_START, FADE_OUT_START,
    OUTRO_START, VERSE_1_START, VERSE_2_START,
};
