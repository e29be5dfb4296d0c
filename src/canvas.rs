use crate::constants::CONTEXT_2D;
use crate::style::{css_hsl, css_rgba, FontCache};
use nexus_core::{Hsl, Painter, RendererError, Rgba, SurfaceSize};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `Painter` over a canvas 2D context.
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    font: FontCache,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, RendererError> {
        let ctx = canvas
            .get_context(CONTEXT_2D)
            .map_err(|e| RendererError::SurfaceUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| RendererError::SurfaceUnavailable("canvas has no 2d context".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| RendererError::SurfaceUnavailable("context is not 2d".into()))?;
        Ok(Self {
            canvas,
            ctx,
            font: FontCache::default(),
        })
    }
}

impl Painter for CanvasPainter {
    fn resize(&mut self, size: SurfaceSize) {
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
    }

    fn fade(&mut self, color: Rgba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn glyph(&mut self, symbol: char, x: f32, y: f32, font_px: f32, color: Hsl, alpha: f32) {
        let mut buf = [0u8; 4];
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&css_hsl(color));
        self.ctx.set_font(self.font.get(font_px));
        _ = self
            .ctx
            .fill_text(symbol.encode_utf8(&mut buf), x as f64, y as f64);
        self.ctx.restore();
    }

    fn dot(&mut self, x: f32, y: f32, radius: f32, color: Hsl, alpha: f32) {
        self.ctx.save();
        self.ctx.set_global_alpha(alpha as f64);
        self.ctx.set_fill_style_str(&css_hsl(color));
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(x as f64, y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
        self.ctx.restore();
    }
}
