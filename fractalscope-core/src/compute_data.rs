// fractalscope-core/src/compute_data.rs

use serde::{Deserialize, Serialize};

/// Escape-time result for a single point.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EscapeResult {
    /// Whether the point exceeded the bailout within the iteration cap
    pub escaped: bool,
    /// Iteration index at escape, or the cap for interior points
    pub iterations: u32,
    /// Continuous iteration count, never negative. Equals `iterations` for
    /// interior points, where it is not used for coloring.
    pub smooth_iterations: f64,
    /// |z|² at escape. Interior points store 0.0.
    pub final_norm_sq: f64,
}

impl EscapeResult {
    /// Result for a point that never escaped.
    pub fn interior(max_iterations: u32) -> Self {
        Self {
            escaped: false,
            iterations: max_iterations,
            smooth_iterations: max_iterations as f64,
            final_norm_sq: 0.0,
        }
    }

    /// Result for a point that escaped at `iterations` with `|z|² = norm_sq`.
    ///
    /// Computes μ = n + 1 − log₂(ln|z|), clamped to zero. The log-log term can
    /// push μ slightly negative for early escapes, and `norm_sq ≤ 1` (only
    /// possible with a bailout at or below 1) leaves the log domain.
    pub fn escaped(iterations: u32, norm_sq: f64) -> Self {
        // ln|z| = ln(|z|²) / 2
        let log_modulus = norm_sq.ln() / 2.0;
        let nu = log_modulus.ln() / std::f64::consts::LN_2;
        let smooth = iterations as f64 + 1.0 - nu;
        Self {
            escaped: true,
            iterations,
            smooth_iterations: if smooth.is_finite() {
                smooth.max(0.0)
            } else {
                0.0
            },
            final_norm_sq: norm_sq,
        }
    }
}
