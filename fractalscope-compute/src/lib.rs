pub mod color_space;
pub mod escape;
pub mod palette;
pub mod raster;

pub use escape::iterate;
pub use palette::{get_color, sample_scheme, Palette, INTERIOR_COLOR};
pub use raster::{compute_fractal, compute_into};

// Re-export core types for convenience
pub use fractalscope_core::*;
