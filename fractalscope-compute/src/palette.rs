//! Palette lookup tables indexed by smooth iteration count.

use crate::color_space::{hsl_to_rgb, lerp_rgb};
use fractalscope_core::{ColorScheme, EscapeResult};
use serde::Serialize;

/// Color of points that never escape.
pub const INTERIOR_COLOR: [u8; 4] = [0, 0, 0, 255];

/// A gradient stop: position in [0, 1] and its color.
type Stop = (f64, [u8; 3]);

/// Textbook palette: blue, near-black, gold, white, light blue, back to blue.
const CLASSIC_STOPS: [Stop; 6] = [
    (0.0, [0, 7, 100]),
    (0.16, [0, 2, 0]),
    (0.42, [255, 170, 0]),
    (0.6425, [237, 255, 255]),
    (0.8575, [32, 107, 203]),
    (1.0, [0, 7, 100]),
];

const FIRE_STOPS: [Stop; 5] = [
    (0.0, [0, 0, 0]),
    (0.25, [255, 0, 0]),
    (0.5, [255, 128, 0]),
    (0.75, [255, 255, 0]),
    (1.0, [255, 255, 255]),
];

const OCEAN_STOPS: [Stop; 4] = [
    (0.0, [0, 0, 64]),
    (0.33, [0, 64, 160]),
    (0.66, [0, 220, 255]),
    (1.0, [255, 255, 255]),
];

/// Hue turns across the full psychedelic ramp.
const PSYCHEDELIC_CYCLES: f64 = 5.0;

/// Color lookup table for one `(scheme, max_iterations)` pair.
///
/// Holds `max_iterations + 1` entries; entry `i` is the scheme sampled at
/// `t = i / max_iterations`. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Palette {
    scheme: ColorScheme,
    max_iterations: u32,
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Build the lookup table. Deterministic and side-effect free.
    pub fn build(scheme: ColorScheme, max_iterations: u32) -> Self {
        let max_iterations = max_iterations.max(1);
        let colors = (0..=max_iterations)
            .map(|i| sample_scheme(scheme, i as f64 / max_iterations as f64))
            .collect();
        Self {
            scheme,
            max_iterations,
            colors,
        }
    }

    /// Cache key this table was built for.
    pub fn key(&self) -> (ColorScheme, u32) {
        (self.scheme, self.max_iterations)
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Interpolated table color at a fractional index.
    ///
    /// The integer part selects the base entry, the fraction blends toward
    /// entry `(base + 1) mod max_iterations`. Negative input is treated as 0.
    pub fn sample(&self, smooth_iterations: f64) -> [u8; 3] {
        let s = smooth_iterations.max(0.0);
        let last = self.colors.len() - 1;
        let base = (s.floor() as usize).min(last);
        let next = (base + 1) % self.max_iterations as usize;
        lerp_rgb(self.colors[base], self.colors[next], s.fract())
    }
}

/// Map an escape result to RGBA through the palette: black for interior
/// points, otherwise the interpolated palette color. Alpha is always 255.
#[inline]
pub fn get_color(result: &EscapeResult, palette: &Palette) -> [u8; 4] {
    if !result.escaped {
        return INTERIOR_COLOR;
    }
    let [r, g, b] = palette.sample(result.smooth_iterations);
    [r, g, b, 255]
}

/// Evaluate a scheme at `t` in [0, 1].
pub fn sample_scheme(scheme: ColorScheme, t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    match scheme {
        ColorScheme::Classic => sample_stops(&CLASSIC_STOPS, t),
        ColorScheme::Fire => sample_stops(&FIRE_STOPS, t),
        ColorScheme::Ocean => sample_stops(&OCEAN_STOPS, t),
        ColorScheme::Psychedelic => hsl_to_rgb(t * PSYCHEDELIC_CYCLES * 360.0, 0.9, 0.5),
        ColorScheme::Grayscale => {
            let v = (t * 255.0).round() as u8;
            [v, v, v]
        }
    }
}

/// Piecewise-linear interpolation across sorted stops.
fn sample_stops(stops: &[Stop], t: f64) -> [u8; 3] {
    // Find segment
    let mut seg = 0;
    while seg < stops.len() - 2 && stops[seg + 1].0 < t {
        seg += 1;
    }

    let (pos0, c0) = stops[seg];
    let (pos1, c1) = stops[seg + 1];
    let seg_t = if (pos1 - pos0).abs() < 1e-10 {
        0.0
    } else {
        ((t - pos0) / (pos1 - pos0)).clamp(0.0, 1.0)
    };
    lerp_rgb(c0, c1, seg_t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_cap_plus_one_entries() {
        for scheme in ColorScheme::ALL {
            for n in [1, 2, 100, 1000] {
                assert_eq!(Palette::build(scheme, n).len(), n as usize + 1);
            }
        }
    }

    #[test]
    fn grayscale_is_linear_ramp() {
        let palette = Palette::build(ColorScheme::Grayscale, 255);
        for (i, c) in palette.colors().iter().enumerate() {
            assert_eq!(*c, [i as u8, i as u8, i as u8]);
        }
    }

    #[test]
    fn classic_endpoints_are_blue() {
        let palette = Palette::build(ColorScheme::Classic, 100);
        assert_eq!(palette.colors()[0], [0, 7, 100]);
        assert_eq!(palette.colors()[100], [0, 7, 100]);
    }

    #[test]
    fn classic_hits_interior_stops() {
        assert_eq!(sample_scheme(ColorScheme::Classic, 0.16), [0, 2, 0]);
        assert_eq!(sample_scheme(ColorScheme::Classic, 0.42), [255, 170, 0]);
        assert_eq!(sample_scheme(ColorScheme::Classic, 0.6425), [237, 255, 255]);
    }

    #[test]
    fn fire_ramps_from_black_to_white() {
        assert_eq!(sample_scheme(ColorScheme::Fire, 0.0), [0, 0, 0]);
        assert_eq!(sample_scheme(ColorScheme::Fire, 0.25), [255, 0, 0]);
        assert_eq!(sample_scheme(ColorScheme::Fire, 0.5), [255, 128, 0]);
        assert_eq!(sample_scheme(ColorScheme::Fire, 0.75), [255, 255, 0]);
        assert_eq!(sample_scheme(ColorScheme::Fire, 1.0), [255, 255, 255]);
    }

    #[test]
    fn ocean_ends_white() {
        assert_eq!(sample_scheme(ColorScheme::Ocean, 0.0), [0, 0, 64]);
        assert_eq!(sample_scheme(ColorScheme::Ocean, 1.0), [255, 255, 255]);
    }

    #[test]
    fn psychedelic_cycles_five_times() {
        // Every fifth of the ramp is a full hue turn, back to red
        for k in 0..=5 {
            let t = k as f64 / PSYCHEDELIC_CYCLES;
            assert_eq!(
                sample_scheme(ColorScheme::Psychedelic, t),
                hsl_to_rgb(0.0, 0.9, 0.5)
            );
        }
    }

    #[test]
    fn build_is_deterministic() {
        for scheme in ColorScheme::ALL {
            assert_eq!(Palette::build(scheme, 500), Palette::build(scheme, 500));
        }
    }

    #[test]
    fn zero_cap_is_treated_as_one() {
        let palette = Palette::build(ColorScheme::Fire, 0);
        assert_eq!(palette.key(), (ColorScheme::Fire, 1));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn interior_is_black() {
        let palette = Palette::build(ColorScheme::Grayscale, 100);
        let color = get_color(&EscapeResult::interior(100), &palette);
        assert_eq!(color, INTERIOR_COLOR);
    }

    #[test]
    fn integer_smooth_value_hits_table_entry() {
        let palette = Palette::build(ColorScheme::Grayscale, 255);
        let result = EscapeResult {
            escaped: true,
            iterations: 40,
            smooth_iterations: 40.0,
            final_norm_sq: 1000.0,
        };
        assert_eq!(get_color(&result, &palette), [40, 40, 40, 255]);
    }

    #[test]
    fn fractional_smooth_value_interpolates() {
        let palette = Palette::build(ColorScheme::Grayscale, 255);
        // Between entries 10 and 11 -> 10.5 rounds to 11
        assert_eq!(palette.sample(10.5), [11, 11, 11]);
        assert_eq!(palette.sample(10.25), [10, 10, 10]);
    }

    #[test]
    fn last_segment_wraps_to_start() {
        let palette = Palette::build(ColorScheme::Grayscale, 255);
        // (254 + 1) mod 255 = 0, so the blend heads back toward black
        assert_eq!(palette.sample(254.5), [127, 127, 127]);
    }

    #[test]
    fn negative_smooth_value_uses_first_entry() {
        let palette = Palette::build(ColorScheme::Fire, 10);
        assert_eq!(palette.sample(-3.0), palette.colors()[0]);
    }
}
