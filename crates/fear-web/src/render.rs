//! 2D canvas implementation of the sketch's drawing surface.

use crate::constants::PLACEHOLDER_FONT;
use fear_core::{Hsba, Rect, Surface, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

/// CSS `rgba()` string for an HSB color, alpha clamped to `[0, 1]`.
pub fn css_rgba(color: Hsba) -> String {
    let [r, g, b, a] = color.to_rgba();
    format!(
        "rgba({},{},{},{:.4})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    video: Option<web::HtmlVideoElement>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("context is not 2d"))?;
        Ok(Self {
            canvas,
            ctx,
            video: None,
        })
    }

    pub fn set_video(&mut self, video: web::HtmlVideoElement) {
        self.video = Some(video);
    }

    #[inline]
    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Hsba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_disc(&mut self, center: Vec2, diameter: f32, color: Hsba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.begin_path();
        let _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            (diameter * 0.5) as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
    }

    fn translate(&mut self, offset: Vec2) {
        let _ = self.ctx.translate(offset.x as f64, offset.y as f64);
    }

    fn reset_transform(&mut self) {
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
    }

    fn fill_text(&mut self, text: &str, center: Vec2, size: f32, color: Hsba) {
        self.ctx.set_fill_style_str(&css_rgba(color));
        self.ctx.set_font(&format!("{}px {}", size, PLACEHOLDER_FONT));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        let _ = self.ctx.fill_text(text, center.x as f64, center.y as f64);
    }

    fn video_frame_size(&self) -> Option<(f32, f32)> {
        let video = self.video.as_ref()?;
        // HAVE_METADATA or better, with known dimensions
        if video.ready_state() < 1 {
            return None;
        }
        let (w, h) = (video.video_width(), video.video_height());
        (w > 0 && h > 0).then_some((w as f32, h as f32))
    }

    fn draw_video(&mut self, rect: Rect) {
        if let Some(video) = &self.video {
            let _ = self.ctx.draw_image_with_html_video_element_and_dw_and_dh(
                video,
                rect.x as f64,
                rect.y as f64,
                rect.w as f64,
                rect.h as f64,
            );
        }
    }
}
