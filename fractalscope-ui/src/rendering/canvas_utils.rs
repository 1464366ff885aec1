use crate::error::RenderError;
use crate::rendering::surface::RasterSurface;
use fractalscope_core::PixelBuffer;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

const OVERLAY_FONT: &str = "14px monospace";
const OVERLAY_LINE_HEIGHT: f64 = 18.0;
const OVERLAY_MARGIN: f64 = 10.0;

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, RenderError> {
    canvas
        .get_context("2d")?
        .ok_or(RenderError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| RenderError::NoContext)
}

/// Draw RGBA pixel data to canvas at specified position.
pub fn draw_pixels_to_canvas(
    ctx: &CanvasRenderingContext2d,
    pixels: &[u8],
    width: u32,
    x: f64,
    y: f64,
) -> Result<(), RenderError> {
    let image_data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels),
        width,
        pixels.len() as u32 / width / 4,
    )?;
    ctx.put_image_data(&image_data, x, y)?;
    Ok(())
}

/// HTML canvas backed surface.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, RenderError> {
        let ctx = get_2d_context(&canvas)?;
        Ok(Self { canvas, ctx })
    }
}

impl RasterSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), RenderError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(());
        }
        draw_pixels_to_canvas(&self.ctx, frame.as_bytes(), frame.width(), 0.0, 0.0)
    }

    fn draw_overlay(&mut self, lines: &[String]) -> Result<(), RenderError> {
        self.ctx.set_font(OVERLAY_FONT);
        self.ctx.set_fill_style_str("rgba(0, 0, 0, 0.5)");
        self.ctx.fill_rect(
            OVERLAY_MARGIN / 2.0,
            OVERLAY_MARGIN / 2.0,
            320.0,
            lines.len() as f64 * OVERLAY_LINE_HEIGHT + OVERLAY_MARGIN,
        );
        self.ctx.set_fill_style_str("white");
        for (i, line) in lines.iter().enumerate() {
            let y = OVERLAY_MARGIN + (i as f64 + 1.0) * OVERLAY_LINE_HEIGHT - 4.0;
            self.ctx.fill_text(line, OVERLAY_MARGIN, y)?;
        }
        Ok(())
    }
}
