//! Engine configuration.
//!
//! Iteration limits, startup defaults and fingerprint precision. A host can
//! supply these as JSON; every field is optional and falls back to the
//! defaults below.

use fractalscope_core::ColorScheme;
use serde::{Deserialize, Serialize};

/// Tunables for one [`crate::FractalEngine`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Smallest accepted iteration cap.
    pub min_iterations: u32,
    /// Largest accepted iteration cap.
    pub max_iterations_limit: u32,
    /// Cap used until the host sends one.
    pub default_max_iterations: u32,
    pub default_color_scheme: ColorScheme,
    /// Decimal places of the Julia constant that take part in the render
    /// fingerprint. Smaller slider jitter does not trigger a re-render.
    pub julia_key_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_iterations: 1,
            max_iterations_limit: 10_000,
            default_max_iterations: 256,
            default_color_scheme: ColorScheme::Classic,
            julia_key_decimals: 6,
        }
    }
}

impl EngineConfig {
    /// Parse from JSON, then normalize.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<EngineConfig>(json).map(EngineConfig::normalized)
    }

    /// Repair inconsistent limits: `1 ≤ min ≤ limit` and the default cap
    /// inside that range. Decimals are capped at 12.
    pub fn normalized(mut self) -> Self {
        self.min_iterations = self.min_iterations.max(1);
        self.max_iterations_limit = self.max_iterations_limit.max(self.min_iterations);
        self.default_max_iterations = self
            .default_max_iterations
            .clamp(self.min_iterations, self.max_iterations_limit);
        self.julia_key_decimals = self.julia_key_decimals.min(12);
        self
    }

    /// Clamp a cap into the configured range.
    pub fn clamp_iterations(&self, value: u32) -> u32 {
        value.clamp(self.min_iterations, self.max_iterations_limit)
    }
}
