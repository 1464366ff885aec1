//! Frame-driven fractal engine.
//!
//! The host calls [`FractalEngine::update`] and then [`FractalEngine::render`]
//! once per animation frame. Everything the engine needs lives in the
//! struct, so several engines can run side by side.

use crate::config::EngineConfig;
use crate::error::RenderError;
use crate::rendering::{
    ProgressiveRenderer, RasterSurface, RenderProgress, RenderState, TickOutcome,
};
use crate::state::{ExternalParameters, ParameterChange, ParameterState};
use fractalscope_core::{zoom_view_at_pixel, FractalParameters, PixelBuffer, ViewState};

pub struct FractalEngine<S: RasterSurface> {
    surface: S,
    state: ParameterState,
    renderer: ProgressiveRenderer,
}

impl<S: RasterSurface> FractalEngine<S> {
    /// Engine with default configuration, sized to `surface`.
    pub fn init(surface: S) -> Self {
        Self::with_config(surface, EngineConfig::default())
    }

    pub fn with_config(surface: S, config: EngineConfig) -> Self {
        let state = ParameterState::new(config);
        let (width, height) = surface.size();
        let renderer = ProgressiveRenderer::new(width, height, state.config().julia_key_decimals);
        log::info!("Fractal engine ready at {}x{}", width, height);
        Self {
            surface,
            state,
            renderer,
        }
    }

    /// Apply this frame's slider values.
    ///
    /// Rendering is not time-based, so `delta_time` is accepted for the host
    /// frame contract and otherwise ignored.
    pub fn update(&mut self, delta_time: f64, raw: &ExternalParameters) -> ParameterChange {
        let _ = delta_time;
        let change = self.state.apply_external_parameters(raw);
        if change.any() {
            log::debug!("Parameters updated: {:?}", change);
        }
        if change.view_reset {
            self.renderer.restart();
        }
        change
    }

    /// One scheduler tick, then present the display buffer and overlay.
    ///
    /// The pass counter advances even when presenting fails, so a broken
    /// surface never triggers recomputation.
    pub fn render(&mut self) -> Result<RenderProgress, RenderError> {
        let outcome = self
            .renderer
            .tick(self.state.view(), self.state.params());
        if outcome == TickOutcome::Skipped {
            return Ok(self.renderer.progress());
        }
        let lines = self.overlay_lines();
        self.surface.present(self.renderer.frame())?;
        self.surface.draw_overlay(&lines)?;
        Ok(self.renderer.progress())
    }

    /// Default framing of the current mode; restarts the pass sequence.
    pub fn reset(&mut self) {
        self.state.reset_view();
        self.renderer.restart();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
        self.renderer.resize(width, height);
    }

    /// One-paragraph summary of what is on screen.
    pub fn state_description(&self) -> String {
        let params = self.state.params();
        let view = self.state.view();
        let config = params.mode.config();
        let subject = match params.mode.julia_constant() {
            Some(c) => format!("{} for c = {:.4}", config.display_name, c),
            None => config.display_name.to_string(),
        };
        format!(
            "{} centered at ({:.6}, {:.6}) with zoom {:.2}x, {} max iterations, {} palette.",
            subject,
            view.center_x,
            view.center_y,
            view.zoom_factor(config.default_span),
            params.max_iterations,
            params.color_scheme.display_name()
        )
    }

    /// Overlay text drawn on every frame.
    pub fn overlay_lines(&self) -> Vec<String> {
        let params = self.state.params();
        let view = self.state.view();
        let config = params.mode.config();
        let mode = match params.mode.julia_constant() {
            Some(c) => format!("Mode: Julia (c = {c})"),
            None => "Mode: Mandelbrot".to_string(),
        };
        vec![
            mode,
            format!("Center: ({:.6}, {:.6})", view.center_x, view.center_y),
            format!("Zoom: {:.2}x", view.zoom_factor(config.default_span)),
            format!("Iterations: {}", params.max_iterations),
            format!("Render: {:.0}%", self.renderer.progress().percentage()),
        ]
    }

    /// Replace the view; restarts the pass sequence.
    pub fn set_view(&mut self, view: ViewState) {
        self.state.set_view(view);
        self.renderer.restart();
    }

    /// Move the center by a plane-space offset.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        let view = self.state.view().panned(dx, dy);
        self.set_view(view);
    }

    /// Zoom about the center. Factors above 1 zoom in.
    pub fn zoom_by(&mut self, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            log::warn!("Ignoring zoom factor {factor}");
            return;
        }
        let view = self.state.view().zoomed(factor);
        self.set_view(view);
    }

    /// Zoom keeping the plane point under pixel `(px, py)` in place.
    pub fn zoom_at(&mut self, factor: f64, px: f64, py: f64) {
        let (width, height) = self.renderer.dimensions();
        if !factor.is_finite() || factor <= 0.0 || width == 0 || height == 0 {
            log::warn!("Ignoring zoom factor {factor} at ({px}, {py})");
            return;
        }
        let view = zoom_view_at_pixel(self.state.view(), factor, px, py, width, height);
        self.set_view(view);
    }

    /// Typed parameter input. Unlike slider input this can select a Julia set
    /// with `c = 0`.
    pub fn set_parameters(&mut self, params: FractalParameters) -> ParameterChange {
        let change = self.state.set_parameters(params);
        if change.view_reset {
            self.renderer.restart();
        }
        change
    }

    pub fn view(&self) -> &ViewState {
        self.state.view()
    }

    pub fn parameters(&self) -> &FractalParameters {
        self.state.params()
    }

    pub fn progress(&self) -> RenderProgress {
        self.renderer.progress()
    }

    pub fn render_state(&self) -> &RenderState {
        self.renderer.state()
    }

    /// Display-sized buffer as of the last tick.
    pub fn frame(&self) -> &PixelBuffer {
        self.renderer.frame()
    }

    pub fn renderer(&self) -> &ProgressiveRenderer {
        &self.renderer
    }

    pub fn palette_rebuilds(&self) -> u64 {
        self.renderer.palette_cache().rebuild_count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
