//! Fractal configuration.
//!
//! Canonical framing and display metadata for each iteration mode, plus the
//! numeric constants shared by the compute and UI crates.

use crate::ViewState;

/// Squared-magnitude bailout. Large relative to the classic radius-2 test so
/// the smooth iteration estimate does not band.
pub const BAILOUT_NORM_SQ: f64 = 256.0;

/// Configuration for a fractal type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalConfig {
    /// Unique identifier
    pub id: &'static str,
    /// Human-readable name for overlays and descriptions
    pub display_name: &'static str,
    /// Default center in plane coordinates
    pub default_center: (f64, f64),
    /// Default width of the viewport in plane units
    pub default_span: f64,
}

impl FractalConfig {
    /// The canonical framing for this fractal.
    pub fn default_view(&self) -> ViewState {
        ViewState::new(self.default_center.0, self.default_center.1, self.default_span)
    }
}

/// Mandelbrot set configuration.
pub static MANDELBROT_CONFIG: FractalConfig = FractalConfig {
    id: "mandelbrot",
    display_name: "Mandelbrot Set",
    default_center: (-0.5, 0.0),
    default_span: 3.5,
};

/// Julia set configuration.
pub static JULIA_CONFIG: FractalConfig = FractalConfig {
    id: "julia",
    display_name: "Julia Set",
    default_center: (0.0, 0.0),
    default_span: 4.0,
};
