//! View and parameter state.
//!
//! Holds the current viewport and fractal parameters, sanitizes raw host
//! input, and reports what changed. Knows nothing about rendering.

use crate::config::EngineConfig;
use fractalscope_core::{ColorScheme, Complex, FractalMode, FractalParameters, ViewState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw slider values as sent by the host once per frame.
///
/// Every field is optional; a missing value leaves the current setting alone.
/// `(juliaReal, juliaImag) == (0, 0)` selects Mandelbrot mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExternalParameters {
    pub max_iterations: Option<f64>,
    pub color_scheme: Option<f64>,
    pub julia_real: Option<f64>,
    pub julia_imag: Option<f64>,
}

impl ExternalParameters {
    pub const MAX_ITERATIONS: &'static str = "maxIterations";
    pub const COLOR_SCHEME: &'static str = "colorScheme";
    pub const JULIA_REAL: &'static str = "juliaReal";
    pub const JULIA_IMAG: &'static str = "juliaImag";

    /// Build from a name → value map. Unknown keys are ignored.
    pub fn from_map(values: &HashMap<String, f64>) -> Self {
        Self {
            max_iterations: values.get(Self::MAX_ITERATIONS).copied(),
            color_scheme: values.get(Self::COLOR_SCHEME).copied(),
            julia_real: values.get(Self::JULIA_REAL).copied(),
            julia_imag: values.get(Self::JULIA_IMAG).copied(),
        }
    }
}

/// What an update changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParameterChange {
    /// Any of cap, scheme or mode differs from before.
    pub parameters: bool,
    /// Mandelbrot ↔ Julia switch.
    pub mode_flipped: bool,
    /// The view was replaced by a mode default.
    pub view_reset: bool,
}

impl ParameterChange {
    pub fn any(&self) -> bool {
        self.parameters || self.view_reset
    }
}

/// Current viewport plus fractal parameters.
#[derive(Clone, Debug)]
pub struct ParameterState {
    config: EngineConfig,
    params: FractalParameters,
    view: ViewState,
}

impl ParameterState {
    pub fn new(config: EngineConfig) -> Self {
        let config = config.normalized();
        let params = FractalParameters::new(
            config.default_max_iterations,
            config.default_color_scheme,
            FractalMode::Mandelbrot,
        );
        let view = params.mode.config().default_view();
        Self {
            config,
            params,
            view,
        }
    }

    pub fn params(&self) -> &FractalParameters {
        &self.params
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Default framing of the current mode.
    pub fn default_view(&self) -> ViewState {
        self.params.mode.config().default_view()
    }

    /// Fold one frame's raw slider values into the state.
    pub fn apply_external_parameters(&mut self, raw: &ExternalParameters) -> ParameterChange {
        let mut next = self.params;

        if let Some(value) = raw.max_iterations {
            if let Some(cap) = self.sanitize_iterations(value) {
                next.max_iterations = cap;
            }
        }

        if let Some(value) = raw.color_scheme {
            if let Some(scheme) = sanitize_scheme(value) {
                next.color_scheme = scheme;
            }
        }

        if raw.julia_real.is_some() || raw.julia_imag.is_some() {
            let current = self.params.mode.julia_constant().unwrap_or(Complex::ZERO);
            let re = raw.julia_real.map_or(current.re, finite_or_zero);
            let im = raw.julia_imag.map_or(current.im, finite_or_zero);
            next.mode = FractalMode::from_julia_components(re, im);
        }

        self.apply(next)
    }

    /// Replace all parameters at once. The cap is clamped to the configured
    /// range; any Julia constant is accepted, including zero.
    pub fn set_parameters(&mut self, params: FractalParameters) -> ParameterChange {
        let mut next = params;
        next.max_iterations = self.config.clamp_iterations(params.max_iterations);
        if let Some(c) = next.mode.julia_constant() {
            if !c.is_finite() {
                log::warn!("Ignoring non-finite Julia constant {c:?}");
                next.mode = self.params.mode;
            }
        }
        self.apply(next)
    }

    /// Replace the view. Unusable components fall back to the mode default.
    pub fn set_view(&mut self, view: ViewState) {
        self.view = view.sanitized(&self.default_view());
    }

    /// Back to the default framing of the current mode.
    pub fn reset_view(&mut self) {
        self.view = self.default_view();
    }

    fn apply(&mut self, next: FractalParameters) -> ParameterChange {
        let mut change = ParameterChange {
            parameters: next != self.params,
            ..ParameterChange::default()
        };

        if self.params.mode.flips_to(&next.mode) {
            let target = next.mode.config();
            log::info!("Switching to {}", target.display_name);
            self.view = target.default_view();
            change.mode_flipped = true;
            change.view_reset = true;
        }

        self.params = next;
        change
    }

    fn sanitize_iterations(&self, value: f64) -> Option<u32> {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite iteration cap {value}");
            return None;
        }
        let min = self.config.min_iterations as f64;
        let max = self.config.max_iterations_limit as f64;
        let rounded = value.round();
        let clamped = rounded.clamp(min, max);
        if clamped != rounded {
            log::warn!("Iteration cap {value} clamped to {clamped}");
        }
        Some(clamped as u32)
    }
}

fn sanitize_scheme(value: f64) -> Option<ColorScheme> {
    if !value.is_finite() {
        log::warn!("Ignoring non-finite color scheme index {value}");
        return None;
    }
    let index = value.round() as i64;
    let scheme = ColorScheme::from_index(index);
    if scheme.index() as i64 != index {
        log::warn!("Color scheme index {value} clamped to {}", scheme.index());
    }
    Some(scheme)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}
