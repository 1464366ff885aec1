use serde::{Deserialize, Serialize};

/// Smallest span accepted from pan/zoom input. Below this, f64 pixel steps
/// collapse and every pixel maps to the same point.
pub const MIN_SPAN: f64 = 1e-13;

/// Viewport in the complex plane.
///
/// - `center_x`, `center_y`: center point in plane coordinates
/// - `span`: visible width in plane units
///
/// The visible height is derived from the output aspect ratio, so one plane
/// unit always covers the same number of pixels on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub center_x: f64,
    pub center_y: f64,
    pub span: f64,
}

impl ViewState {
    pub const fn new(center_x: f64, center_y: f64, span: f64) -> Self {
        Self {
            center_x,
            center_y,
            span,
        }
    }

    /// Visible height in plane units for an output of the given aspect ratio
    /// (`width / height`).
    pub fn height_span(&self, aspect: f64) -> f64 {
        self.span / aspect
    }

    /// Magnification relative to a reference span.
    pub fn zoom_factor(&self, default_span: f64) -> f64 {
        default_span / self.span
    }

    /// Same center, span divided by `factor`. Factors above 1 zoom in.
    pub fn zoomed(&self, factor: f64) -> Self {
        Self {
            span: self.span / factor,
            ..*self
        }
    }

    /// Center moved by a plane-space offset.
    pub fn panned(&self, dx: f64, dy: f64) -> Self {
        Self {
            center_x: self.center_x + dx,
            center_y: self.center_y + dy,
            ..*self
        }
    }

    /// Replace unusable components with those of `fallback`.
    ///
    /// A non-finite center component falls back individually; a span that is
    /// non-finite or not positive falls back to the fallback span, and a tiny
    /// positive span is raised to [`MIN_SPAN`].
    pub fn sanitized(&self, fallback: &ViewState) -> Self {
        let center_x = if self.center_x.is_finite() {
            self.center_x
        } else {
            fallback.center_x
        };
        let center_y = if self.center_y.is_finite() {
            self.center_y
        } else {
            fallback.center_y
        };
        let span = if self.span.is_finite() && self.span > 0.0 {
            self.span.max(MIN_SPAN)
        } else {
            fallback.span
        };
        Self {
            center_x,
            center_y,
            span,
        }
    }
}
