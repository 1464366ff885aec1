#[cfg(target_arch = "wasm32")]
pub mod canvas_utils;
mod palette_cache;
mod pass;
mod render_progress;
mod scheduler;
mod surface;
mod upscale;

#[cfg(target_arch = "wasm32")]
pub use canvas_utils::CanvasSurface;
pub use palette_cache::PaletteCache;
pub use pass::Pass;
pub use render_progress::RenderProgress;
pub use scheduler::{ParamKey, ProgressiveRenderer, RenderState, TickOutcome};
pub use surface::{MemorySurface, RasterSurface};
pub use upscale::upscale_bilinear;
