use fractalscope_core::{Complex, EscapeResult, FractalMode, FractalParameters, BAILOUT_NORM_SQ};

/// Escape-time iteration of `z ← z² + c` for one point, in f64.
///
/// Mandelbrot mode starts at `z = 0` with `c = point`; Julia mode starts at
/// `z = point` with the fixed constant. The iteration index `n` counts from 0,
/// so a point whose first update already reaches the bailout escapes at 0.
pub fn iterate(point: Complex, params: &FractalParameters) -> EscapeResult {
    let (mut zr, mut zi, cr, ci) = match params.mode {
        FractalMode::Mandelbrot => (0.0_f64, 0.0_f64, point.re, point.im),
        FractalMode::Julia { c } => (point.re, point.im, c.re, c.im),
    };

    for n in 0..params.max_iterations {
        // z = z^2 + c
        let new_zi = 2.0 * zr * zi + ci;
        zr = zr * zr - zi * zi + cr;
        zi = new_zi;

        let norm_sq = zr * zr + zi * zi;
        if norm_sq >= BAILOUT_NORM_SQ {
            return EscapeResult::escaped(n, norm_sq);
        }
    }

    EscapeResult::interior(params.max_iterations)
}
