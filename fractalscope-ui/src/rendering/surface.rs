use crate::error::RenderError;
use fractalscope_core::PixelBuffer;

/// Destination for finished frames.
///
/// The engine never talks to a canvas directly; it hands each frame and its
/// overlay text to a surface. Frames always match [`RasterSurface::size`].
pub trait RasterSurface {
    /// Output size in pixels.
    fn size(&self) -> (u32, u32);

    /// Adopt new pixel dimensions. Surfaces sized by their host can ignore this.
    fn resize(&mut self, _width: u32, _height: u32) {}

    /// Show a full-size RGBA frame.
    fn present(&mut self, frame: &PixelBuffer) -> Result<(), RenderError>;

    /// Draw overlay text on top of the last presented frame.
    fn draw_overlay(&mut self, lines: &[String]) -> Result<(), RenderError>;
}

/// In-memory surface that keeps the most recent frame and overlay.
///
/// Used by tests and headless drivers.
#[derive(Clone, Debug, Default)]
pub struct MemorySurface {
    width: u32,
    height: u32,
    frame: Option<PixelBuffer>,
    overlay: Vec<String>,
    presented: u64,
}

impl MemorySurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Last presented frame.
    pub fn frame(&self) -> Option<&PixelBuffer> {
        self.frame.as_ref()
    }

    pub fn overlay(&self) -> &[String] {
        &self.overlay
    }

    /// Number of frames presented so far.
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }
}

impl RasterSurface for MemorySurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn present(&mut self, frame: &PixelBuffer) -> Result<(), RenderError> {
        let (actual_width, actual_height) = frame.dimensions();
        if (actual_width, actual_height) != (self.width, self.height) {
            return Err(RenderError::SizeMismatch {
                expected_width: self.width,
                expected_height: self.height,
                actual_width,
                actual_height,
            });
        }
        match &mut self.frame {
            Some(existing) => {
                existing.resize(actual_width, actual_height);
                existing.as_bytes_mut().copy_from_slice(frame.as_bytes());
            }
            None => self.frame = Some(frame.clone()),
        }
        self.presented += 1;
        Ok(())
    }

    fn draw_overlay(&mut self, lines: &[String]) -> Result<(), RenderError> {
        self.overlay = lines.to_vec();
        Ok(())
    }
}
