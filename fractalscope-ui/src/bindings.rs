//! JavaScript entry points.

use crate::engine::FractalEngine;
use crate::rendering::CanvasSurface;
use crate::state::ExternalParameters;
use gloo_utils::format::JsValueSerdeExt;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

/// Install the panic hook and console logger. Call once before anything else.
#[wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

/// Fractal explorer bound to one canvas.
#[wasm_bindgen]
pub struct FractalExplorer {
    engine: FractalEngine<CanvasSurface>,
}

#[wasm_bindgen]
impl FractalExplorer {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<FractalExplorer, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        Ok(Self {
            engine: FractalEngine::init(surface),
        })
    }

    /// Apply slider values: `{ maxIterations, colorScheme, juliaReal, juliaImag }`.
    pub fn update(&mut self, delta_time: f64, params: JsValue) -> Result<(), JsValue> {
        let raw: ExternalParameters = if params.is_undefined() || params.is_null() {
            ExternalParameters::default()
        } else {
            params
                .into_serde()
                .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {e}")))?
        };
        self.engine.update(delta_time, &raw);
        Ok(())
    }

    /// Run one progressive pass and draw it. Returns true once the full
    /// resolution frame is on screen.
    pub fn render(&mut self) -> Result<bool, JsValue> {
        Ok(self.engine.render()?.is_complete)
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
    }

    #[wasm_bindgen(js_name = panBy)]
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.engine.pan_by(dx, dy);
    }

    #[wasm_bindgen(js_name = zoomAt)]
    pub fn zoom_at(&mut self, factor: f64, px: f64, py: f64) {
        self.engine.zoom_at(factor, px, py);
    }

    #[wasm_bindgen(js_name = getStateDescription)]
    pub fn get_state_description(&self) -> String {
        self.engine.state_description()
    }
}
