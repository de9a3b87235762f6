use crate::constants::{EDGE_RGB, PARTICLE_FILL};
use crate::dom;
use glam::Vec2;
use site_core::Surface;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D-context backed surface for the particle field.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the canvas cannot hand out a 2D context.
    pub fn new(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, extent: Vec2) {
        // resizing the canvas resets its transform, so set it every frame
        let dpr = dom::device_pixel_ratio();
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.ctx
            .clear_rect(0.0, 0.0, extent.x as f64, extent.y as f64);
        self.ctx.set_fill_style_str(PARTICLE_FILL);
        self.ctx.set_line_width(1.0);
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_edge(&mut self, from: Vec2, to: Vec2, alpha: f32) {
        let [r, g, b] = EDGE_RGB;
        self.ctx
            .set_stroke_style_str(&format!("rgba({r}, {g}, {b}, {alpha:.3})"));
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
