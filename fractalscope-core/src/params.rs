//! Inputs that determine pixel colors, apart from the viewport.

use crate::config::{FractalConfig, JULIA_CONFIG, MANDELBROT_CONFIG};
use crate::Complex;
use serde::{Deserialize, Serialize};

/// Which quadratic iteration to run.
///
/// Mandelbrot: `z₀ = 0`, `c = pixel`. Julia: `z₀ = pixel`, `c = constant`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FractalMode {
    #[default]
    Mandelbrot,
    Julia { c: Complex },
}

impl FractalMode {
    /// Decode the external slider encoding, where the zero vector selects
    /// Mandelbrot mode and anything else is a Julia constant.
    pub fn from_julia_components(re: f64, im: f64) -> Self {
        let c = Complex::new(re, im);
        if c.is_zero() {
            Self::Mandelbrot
        } else {
            Self::Julia { c }
        }
    }

    pub fn is_julia(&self) -> bool {
        matches!(self, Self::Julia { .. })
    }

    /// Julia constant, if any.
    pub fn julia_constant(&self) -> Option<Complex> {
        match self {
            Self::Mandelbrot => None,
            Self::Julia { c } => Some(*c),
        }
    }

    /// True when `other` iterates a different family (Mandelbrot vs Julia),
    /// regardless of the Julia constant.
    pub fn flips_to(&self, other: &FractalMode) -> bool {
        self.is_julia() != other.is_julia()
    }

    pub fn config(&self) -> &'static FractalConfig {
        match self {
            Self::Mandelbrot => &MANDELBROT_CONFIG,
            Self::Julia { .. } => &JULIA_CONFIG,
        }
    }
}

/// Built-in palettes. The discriminant is the external slider index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Classic = 0,
    Fire = 1,
    Ocean = 2,
    Psychedelic = 3,
    Grayscale = 4,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::Classic,
        ColorScheme::Fire,
        ColorScheme::Ocean,
        ColorScheme::Psychedelic,
        ColorScheme::Grayscale,
    ];

    /// Scheme for a slider index, clamped into the valid range.
    pub fn from_index(index: i64) -> Self {
        let clamped = index.clamp(0, Self::ALL.len() as i64 - 1);
        Self::ALL[clamped as usize]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Fire => "fire",
            Self::Ocean => "ocean",
            Self::Psychedelic => "psychedelic",
            Self::Grayscale => "grayscale",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Psychedelic => "Psychedelic",
            Self::Grayscale => "Grayscale",
        }
    }
}

/// Everything besides the viewport that affects pixel output.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FractalParameters {
    /// Iteration cap, always at least 1
    pub max_iterations: u32,
    pub color_scheme: ColorScheme,
    pub mode: FractalMode,
}

impl FractalParameters {
    pub fn new(max_iterations: u32, color_scheme: ColorScheme, mode: FractalMode) -> Self {
        Self {
            max_iterations: max_iterations.max(1),
            color_scheme,
            mode,
        }
    }
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self::new(256, ColorScheme::Classic, FractalMode::Mandelbrot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_is_mandelbrot_sentinel() {
        assert_eq!(
            FractalMode::from_julia_components(0.0, 0.0),
            FractalMode::Mandelbrot
        );
        assert_eq!(
            FractalMode::from_julia_components(-0.0, 0.0),
            FractalMode::Mandelbrot
        );
    }

    #[test]
    fn non_zero_vector_is_julia() {
        let mode = FractalMode::from_julia_components(-0.8, 0.156);
        assert_eq!(mode.julia_constant(), Some(Complex::new(-0.8, 0.156)));
        assert!(mode.is_julia());
    }

    #[test]
    fn flip_ignores_julia_constant_changes() {
        let a = FractalMode::Julia {
            c: Complex::new(-0.8, 0.156),
        };
        let b = FractalMode::Julia {
            c: Complex::new(0.285, 0.01),
        };
        assert!(!a.flips_to(&b));
        assert!(a.flips_to(&FractalMode::Mandelbrot));
        assert!(FractalMode::Mandelbrot.flips_to(&a));
    }

    #[test]
    fn mode_selects_config() {
        assert_eq!(FractalMode::Mandelbrot.config().id, "mandelbrot");
        assert_eq!(FractalMode::from_julia_components(0.1, 0.0).config().id, "julia");
    }

    #[test]
    fn scheme_index_is_clamped() {
        assert_eq!(ColorScheme::from_index(-3), ColorScheme::Classic);
        assert_eq!(ColorScheme::from_index(3), ColorScheme::Psychedelic);
        assert_eq!(ColorScheme::from_index(99), ColorScheme::Grayscale);
    }

    #[test]
    fn scheme_index_roundtrip() {
        for scheme in ColorScheme::ALL {
            assert_eq!(ColorScheme::from_index(scheme.index() as i64), scheme);
        }
    }

    #[test]
    fn parameters_enforce_minimum_iterations() {
        let params = FractalParameters::new(0, ColorScheme::Fire, FractalMode::Mandelbrot);
        assert_eq!(params.max_iterations, 1);
    }

    #[test]
    fn mode_serializes_with_tag() {
        let json = serde_json::to_string(&FractalMode::Julia {
            c: Complex::new(0.5, 0.25),
        })
        .unwrap();
        assert_eq!(json, r#"{"kind":"julia","c":{"re":0.5,"im":0.25}}"#);
    }
}
