//! Progressive pass scheduler.
//!
//! Each tick runs at most one raster pass: 1/4 resolution, then 1/2, then
//! full. Previews are upscaled into the display buffer; the full pass is
//! computed straight into it and then replayed until something invalidates it.

use crate::rendering::palette_cache::PaletteCache;
use crate::rendering::pass::Pass;
use crate::rendering::render_progress::RenderProgress;
use crate::rendering::upscale::upscale_bilinear;
use fractalscope_compute::compute_into;
use fractalscope_core::{ColorScheme, FractalParameters, PixelBuffer, ViewState};
use std::fmt;

/// Fingerprint of everything that affects pixel colors except the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParamKey {
    pub max_iterations: u32,
    pub color_scheme: ColorScheme,
    /// Julia constant scaled by `10^decimals` and rounded; `None` for Mandelbrot.
    pub julia: Option<(i64, i64)>,
    pub width: u32,
    pub height: u32,
}

impl ParamKey {
    pub fn new(params: &FractalParameters, width: u32, height: u32, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self {
            max_iterations: params.max_iterations,
            color_scheme: params.color_scheme,
            julia: params
                .mode
                .julia_constant()
                .map(|c| ((c.re * scale).round() as i64, (c.im * scale).round() as i64)),
            width,
            height,
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.max_iterations, self.color_scheme.id())?;
        match self.julia {
            Some((re, im)) => write!(f, "_j{re}:{im}")?,
            None => write!(f, "_m")?,
        }
        write!(f, "_{}x{}", self.width, self.height)
    }
}

/// Where the pass sequence stands.
///
/// `pass` counts completed passes: 0 = recompute needed, 1 = 1/4 drawn,
/// 2 = 1/2 drawn, 3 = full resolution drawn and cached.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderState {
    pub pass: u8,
    pub param_key: Option<ParamKey>,
}

impl RenderState {
    pub const COMPLETE: u8 = 3;

    pub fn is_cached(&self) -> bool {
        self.pass >= Self::COMPLETE
    }

    fn restart(&mut self) {
        self.pass = 0;
    }
}

/// What one tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A pass was computed; the display buffer holds its (upscaled) result.
    Computed(Pass),
    /// The cached full-resolution frame was reused.
    Replayed,
    /// Zero-sized output, nothing to draw.
    Skipped,
}

/// Owns the buffer pool, the palette cache and the pass state machine.
#[derive(Debug)]
pub struct ProgressiveRenderer {
    width: u32,
    height: u32,
    julia_key_decimals: u32,
    state: RenderState,
    palettes: PaletteCache,
    quarter: PixelBuffer,
    half: PixelBuffer,
    full: PixelBuffer,
}

impl ProgressiveRenderer {
    pub fn new(width: u32, height: u32, julia_key_decimals: u32) -> Self {
        let mut renderer = Self {
            width: 0,
            height: 0,
            julia_key_decimals,
            state: RenderState::default(),
            palettes: PaletteCache::new(),
            quarter: PixelBuffer::default(),
            half: PixelBuffer::default(),
            full: PixelBuffer::default(),
        };
        renderer.resize(width, height);
        renderer
    }

    /// Adopt new output dimensions. Reallocates the pool and restarts.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if width == 0 || height == 0 {
            for buffer in [&mut self.quarter, &mut self.half, &mut self.full] {
                buffer.resize(0, 0);
            }
        } else {
            let (qw, qh) = Pass::Quarter.dimensions(width, height);
            let (hw, hh) = Pass::Half.dimensions(width, height);
            self.quarter.resize(qw, qh);
            self.half.resize(hw, hh);
            self.full.resize(width, height);
        }
        log::debug!("Render pool resized for {}x{}", width, height);
        self.state.restart();
    }

    /// Force pass 0 on the next tick without touching the fingerprint.
    pub fn restart(&mut self) {
        if self.state.pass != 0 {
            log::debug!("Restarting progressive render");
        }
        self.state.restart();
    }

    /// Run one scheduler step for `view` and `params`.
    pub fn tick(&mut self, view: &ViewState, params: &FractalParameters) -> TickOutcome {
        if self.width == 0 || self.height == 0 {
            return TickOutcome::Skipped;
        }

        let key = ParamKey::new(params, self.width, self.height, self.julia_key_decimals);
        if self.state.param_key != Some(key) {
            if let Some(old) = self.state.param_key {
                log::debug!("Parameters changed ({old} -> {key}), dropping cached frame");
            }
            self.state.param_key = Some(key);
            self.state.restart();
        }

        let Some(pass) = Pass::from_completed(self.state.pass) else {
            return TickOutcome::Replayed;
        };

        let palette = self
            .palettes
            .get(params.color_scheme, params.max_iterations);
        match pass {
            Pass::Quarter => {
                compute_into(&mut self.quarter, view, params, palette);
                upscale_bilinear(&self.quarter, &mut self.full);
            }
            Pass::Half => {
                compute_into(&mut self.half, view, params, palette);
                upscale_bilinear(&self.half, &mut self.full);
            }
            Pass::Full => compute_into(&mut self.full, view, params, palette),
        }
        let (pw, ph) = pass.dimensions(self.width, self.height);
        log::trace!("Pass {} done at {}x{}", pass.label(), pw, ph);
        if pass.is_final() {
            log::debug!("Full frame cached for {}", key);
        }

        self.state.pass += 1;
        TickOutcome::Computed(pass)
    }

    /// Display-sized buffer: the latest upscaled preview or the cached frame.
    pub fn frame(&self) -> &PixelBuffer {
        &self.full
    }

    pub fn state(&self) -> &RenderState {
        &self.state
    }

    pub fn progress(&self) -> RenderProgress {
        RenderProgress::at(self.state.pass as u32, RenderState::COMPLETE as u32)
    }

    pub fn palette_cache(&self) -> &PaletteCache {
        &self.palettes
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Sizes of the quarter, half and full buffers.
    pub fn pool_dimensions(&self) -> [(u32, u32); 3] {
        [
            self.quarter.dimensions(),
            self.half.dimensions(),
            self.full.dimensions(),
        ]
    }
}
