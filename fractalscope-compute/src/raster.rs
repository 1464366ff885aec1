use crate::escape::iterate;
use crate::palette::{get_color, Palette};
use fractalscope_core::pixel_buffer::CHANNELS;
use fractalscope_core::{FractalParameters, PixelBuffer, PlaneMapping, ViewState};

/// Fill `buffer` with the fractal at `width × height` for `view`.
///
/// Hot loop: no allocation, no return value. `buffer` must hold at least
/// `width * height * 4` bytes; callers size it for the pass before calling.
pub fn compute_fractal(
    buffer: &mut [u8],
    width: u32,
    height: u32,
    view: &ViewState,
    params: &FractalParameters,
    palette: &Palette,
) {
    if width == 0 || height == 0 {
        return;
    }
    debug_assert!(
        buffer.len() >= width as usize * height as usize * CHANNELS,
        "buffer too small for {}x{}",
        width,
        height
    );

    let mapping = PlaneMapping::new(view, width, height);
    let row_len = width as usize * CHANNELS;

    for (py, row) in buffer
        .chunks_exact_mut(row_len)
        .take(height as usize)
        .enumerate()
    {
        for (px, pixel) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let point = mapping.pixel_to_plane(px as u32, py as u32);
            let result = iterate(point, params);
            pixel.copy_from_slice(&get_color(&result, palette));
        }
    }
}

/// Render into a [`PixelBuffer`] at its own dimensions.
pub fn compute_into(
    target: &mut PixelBuffer,
    view: &ViewState,
    params: &FractalParameters,
    palette: &Palette,
) {
    let (width, height) = target.dimensions();
    compute_fractal(target.as_bytes_mut(), width, height, view, params, palette);
}
