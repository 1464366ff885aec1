#[cfg(target_arch = "wasm32")]
mod bindings;
pub mod config;
pub mod engine;
pub mod error;
pub mod rendering;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub use bindings::{start, FractalExplorer};
pub use config::EngineConfig;
pub use engine::FractalEngine;
pub use error::RenderError;
pub use rendering::{MemorySurface, RasterSurface, RenderProgress};
pub use state::{ExternalParameters, ParameterChange, ParameterState};
