//! # Voyage - Beat-Synchronized Procedural Space Flythrough
//!
//! Voyage renders a deterministic journey through a procedurally generated
//! universe - starfields, nebulae, spiral galaxies, a solar system and an
//! Earth closeup - choreographed to the tempo and section structure of a
//! music track. Every frame is a pure function of elapsed time: the engine
//! holds no per-frame mutable simulation state, so playback can be driven,
//! paused, or scrubbed from any host loop.
//!
//! ## Features
//!
//! - **Math**: Vectors, colors, easing curves
//! - **Core**: Beat clock, playback transport, engine entry point
//! - **Camera**: Phase-based flight timeline and screen projector
//! - **Scene**: Seeded generation of 63 000 stars, nebulae, galaxies, planets
//! - **Render**: Ordered layer passes emitting retained 2D draw commands
//!
//! ## Example
//!
//! ```ignore
//! use voyage::prelude::*;
//!
//! let mut engine = EngineBuilder::new().seed(7).build()?;
//! engine.start(now_seconds);
//!
//! // each animation frame:
//! let output = engine.frame(now_seconds);
//! execute(&output.draw); // hand the commands to a 2D surface
//! ```

#![warn(missing_docs)]

#[cfg(feature = "web")]
use wasm_bindgen::prelude::*;

pub mod math;
pub mod core;
pub mod camera;
pub mod scene;
pub mod render;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

// Re-export commonly used types
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::math::*;
    pub use crate::core::*;
    pub use crate::camera::*;
    pub use crate::scene::*;
    pub use crate::render::*;
}

/// Initialize the engine for WASM environments.
/// Sets up panic hooks for better error messages in the browser console.
#[cfg(feature = "web")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const NAME: &str = "Voyage";
