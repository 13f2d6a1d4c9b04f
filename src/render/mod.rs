//! # Render Module
//!
//! Turns per-frame state and scene content into an ordered list of 2D
//! draw commands. The pipeline owns the layer passes; hosts execute the
//! resulting [`DrawList`] on whatever surface they drive.

pub mod draw;
pub mod idle;
pub mod pass;
pub mod passes;
pub mod pipeline;

pub use draw::{BlendMode, ColorStop, DrawCmd, DrawList, Fill, RadialGradient, Rgba};
pub use idle::{render_idle, IDLE_STAR_BUDGET};
pub use pass::{FrameContext, LayerPass};
pub use pipeline::{RenderPipeline, ACTIVE_BACKGROUND};
