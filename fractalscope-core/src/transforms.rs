use crate::{Complex, ViewState};

pub fn calculate_aspect_ratio(canvas_width: u32, canvas_height: u32) -> f64 {
    canvas_width as f64 / canvas_height as f64
}

/// Pixel → plane mapping for one raster of a given size.
///
/// Both axes share `step`, so the image is never stretched: the visible
/// height is `span / aspect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneMapping {
    pub x_min: f64,
    pub y_min: f64,
    pub step: f64,
}

impl PlaneMapping {
    pub fn new(view: &ViewState, width: u32, height: u32) -> Self {
        let aspect = calculate_aspect_ratio(width, height);
        Self {
            x_min: view.center_x - view.span / 2.0,
            y_min: view.center_y - view.height_span(aspect) / 2.0,
            step: view.span / width as f64,
        }
    }

    #[inline]
    pub fn pixel_to_plane(&self, px: u32, py: u32) -> Complex {
        Complex::new(
            self.x_min + px as f64 * self.step,
            self.y_min + py as f64 * self.step,
        )
    }
}

/// Convert a pixel coordinate to its point in the complex plane.
pub fn pixel_to_plane(px: u32, py: u32, view: &ViewState, canvas_size: (u32, u32)) -> Complex {
    PlaneMapping::new(view, canvas_size.0, canvas_size.1).pixel_to_plane(px, py)
}

/// Zoom by `factor` while keeping the plane point under pixel
/// `(pixel_x, pixel_y)` fixed on screen.
pub fn zoom_view_at_pixel(
    view: &ViewState,
    factor: f64,
    pixel_x: f64,
    pixel_y: f64,
    canvas_width: u32,
    canvas_height: u32,
) -> ViewState {
    let before = PlaneMapping::new(view, canvas_width, canvas_height);
    let anchor_x = before.x_min + pixel_x * before.step;
    let anchor_y = before.y_min + pixel_y * before.step;

    let zoomed = view.zoomed(factor);
    let after = PlaneMapping::new(&zoomed, canvas_width, canvas_height);

    // Shift so the anchor lands on the same pixel again
    zoomed.panned(
        anchor_x - (after.x_min + pixel_x * after.step),
        anchor_y - (after.y_min + pixel_y * after.step),
    )
}
