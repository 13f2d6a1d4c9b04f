//! Web bindings for the Voyage engine.
//!
//! This module provides JavaScript-friendly APIs via wasm-bindgen: a
//! [`CanvasApp`] that owns the engine and executes its draw lists on a
//! Canvas 2D context. Audio transport, buttons and overlay chrome stay
//! on the host page; the app only renders and reports playback edges.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::core::{format_timestamp, Engine, EngineBuilder};
use crate::render::{BlendMode, DrawCmd, DrawList, Fill, RadialGradient};

/// Fraction of the shorter window edge the square canvas occupies.
const CANVAS_WINDOW_FRACTION: f64 = 0.98;

/// Flythrough application bound to an HTML canvas.
#[wasm_bindgen]
pub struct CanvasApp {
    engine: Engine,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    last_elapsed: f32,
    last_phase: &'static str,
}

#[wasm_bindgen]
impl CanvasApp {
    /// Create an app attached to the canvas with the given element id.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<CanvasApp, JsValue> {
        let document = window()
            .ok_or_else(|| JsValue::from_str("no window"))?
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas element not found"))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;

        let engine = EngineBuilder::new()
            .viewport(canvas.width().max(1))
            .build()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        let mut app = CanvasApp {
            engine,
            canvas,
            ctx,
            last_elapsed: 0.0,
            last_phase: "Intro",
        };
        app.render_idle();
        Ok(app)
    }

    /// Begin playback. `now_ms` is a monotonic host timestamp such as
    /// `performance.now()`.
    pub fn start(&mut self, now_ms: f64) {
        self.engine.start(now_ms / 1000.0);
    }

    /// Stop playback and show the idle backdrop.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.last_elapsed = 0.0;
        self.last_phase = "Intro";
        self.render_idle();
    }

    /// Whether the flythrough is currently running.
    pub fn is_playing(&self) -> bool {
        self.engine.is_playing()
    }

    /// Render the frame for the given host timestamp.
    ///
    /// Returns true exactly once, on the frame the track ends; the host
    /// should stop its audio element and show its restart prompt.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let out = self.engine.frame(now_ms / 1000.0);
        self.last_elapsed = out.elapsed;
        self.last_phase = out.phase.label();
        self.execute(&out.draw);
        out.finished
    }

    /// Track section label of the last rendered frame.
    pub fn phase_label(&self) -> String {
        self.last_phase.to_string()
    }

    /// Elapsed seconds of the last rendered frame.
    pub fn elapsed(&self) -> f32 {
        self.last_elapsed
    }

    /// Elapsed time of the last rendered frame as `mm:ss`.
    pub fn formatted_time(&self) -> String {
        format_timestamp(self.last_elapsed)
    }

    /// Fit the square canvas into a window of the given CSS pixel size,
    /// scaling the backing store by the device pixel ratio.
    pub fn resize(&mut self, width: f64, height: f64) {
        let dpr = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
        let css_size = (width.min(height) * CANVAS_WINDOW_FRACTION).max(1.0);
        let backing = (css_size * dpr).round().max(1.0) as u32;
        self.canvas.set_width(backing);
        self.canvas.set_height(backing);
        let style = self.canvas.style();
        let _ = style.set_property("width", &format!("{}px", css_size));
        let _ = style.set_property("height", &format!("{}px", css_size));
        self.engine.set_viewport(backing);
        if !self.engine.is_playing() {
            self.render_idle();
        }
    }

    fn render_idle(&mut self) {
        let list = self.engine.idle_frame();
        self.execute(&list);
    }

    fn execute(&self, list: &DrawList) {
        let viewport = self.engine.viewport() as f64;
        for cmd in list.commands() {
            self.execute_cmd(cmd, viewport);
        }
        // Leave the context in the default compositing mode.
        let _ = self.ctx.set_global_composite_operation("source-over");
    }

    fn execute_cmd(&self, cmd: &DrawCmd, viewport: f64) {
        let ctx = &self.ctx;
        match cmd {
            DrawCmd::Clear { color } => {
                let _ = ctx.set_global_composite_operation("source-over");
                let [r, g, b] = color.to_rgb_bytes();
                ctx.set_fill_style_str(&format!("rgb({}, {}, {})", r, g, b));
                ctx.fill_rect(0.0, 0.0, viewport, viewport);
            }
            DrawCmd::Disc {
                center,
                radius,
                fill,
                blend,
            } => {
                self.set_blend(*blend);
                self.set_fill(fill);
                ctx.begin_path();
                let _ = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    (*radius).max(0.0) as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
            DrawCmd::Ellipse {
                center,
                rx,
                ry,
                rotation,
                fill,
                blend,
            } => {
                self.set_blend(*blend);
                self.set_fill(fill);
                ctx.begin_path();
                let _ = ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    (*rx).max(0.0) as f64,
                    (*ry).max(0.0) as f64,
                    *rotation as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.fill();
            }
            DrawCmd::EllipseStroke {
                center,
                rx,
                ry,
                rotation,
                color,
                width,
            } => {
                self.set_blend(BlendMode::SourceOver);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                let _ = ctx.ellipse(
                    center.x as f64,
                    center.y as f64,
                    (*rx).max(0.0) as f64,
                    (*ry).max(0.0) as f64,
                    *rotation as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.stroke();
            }
            DrawCmd::CircleStroke {
                center,
                radius,
                color,
                width,
            } => {
                self.set_blend(BlendMode::SourceOver);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                let _ = ctx.arc(
                    center.x as f64,
                    center.y as f64,
                    (*radius).max(0.0) as f64,
                    0.0,
                    std::f64::consts::TAU,
                );
                ctx.stroke();
            }
            DrawCmd::Polyline {
                points,
                color,
                width,
                blend,
            } => {
                if points.len() < 2 {
                    return;
                }
                self.set_blend(*blend);
                ctx.set_stroke_style_str(&color.to_css());
                ctx.set_line_width(*width as f64);
                ctx.begin_path();
                ctx.move_to(points[0].x as f64, points[0].y as f64);
                for point in &points[1..] {
                    ctx.line_to(point.x as f64, point.y as f64);
                }
                ctx.stroke();
            }
            DrawCmd::Overlay { fill } => {
                self.set_blend(BlendMode::SourceOver);
                self.set_fill(fill);
                ctx.fill_rect(0.0, 0.0, viewport, viewport);
            }
        }
    }

    fn set_blend(&self, blend: BlendMode) {
        let mode = match blend {
            BlendMode::SourceOver => "source-over",
            BlendMode::Screen => "screen",
        };
        let _ = self.ctx.set_global_composite_operation(mode);
    }

    fn set_fill(&self, fill: &Fill) {
        match fill {
            Fill::Solid(color) => self.ctx.set_fill_style_str(&color.to_css()),
            Fill::Radial(gradient) => {
                if let Some(canvas_gradient) = self.make_gradient(gradient) {
                    self.ctx.set_fill_style_canvas_gradient(&canvas_gradient);
                }
            }
        }
    }

    fn make_gradient(&self, gradient: &RadialGradient) -> Option<web_sys::CanvasGradient> {
        let cx = gradient.center.x as f64;
        let cy = gradient.center.y as f64;
        let canvas_gradient = self
            .ctx
            .create_radial_gradient(
                cx,
                cy,
                gradient.inner_radius.max(0.0) as f64,
                cx,
                cy,
                gradient.radius.max(0.0) as f64,
            )
            .ok()?;
        for stop in &gradient.stops {
            let _ =
                canvas_gradient.add_color_stop(stop.offset.clamp(0.0, 1.0), &stop.color.to_css());
        }
        Some(canvas_gradient)
    }
}
