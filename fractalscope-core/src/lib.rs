pub mod complex;
pub mod compute_data;
pub mod config;
pub mod params;
pub mod pixel_buffer;
pub mod transforms;
pub mod viewport;

pub use complex::Complex;
pub use compute_data::EscapeResult;
pub use config::{FractalConfig, BAILOUT_NORM_SQ, JULIA_CONFIG, MANDELBROT_CONFIG};
pub use params::{ColorScheme, FractalMode, FractalParameters};
pub use pixel_buffer::PixelBuffer;
pub use transforms::{calculate_aspect_ratio, pixel_to_plane, zoom_view_at_pixel, PlaneMapping};
pub use viewport::ViewState;
