use fractalscope_core::pixel_buffer::CHANNELS;
use fractalscope_core::PixelBuffer;

/// Stretches a preview buffer over `target` with bilinear filtering.
///
/// Both buffers map the same view with one plane step per axis, so a target
/// pixel's source coordinate scales by `r = sw / tw` on both axes. Columns
/// share the left edge; rows share the vertical center, giving
/// `(tx · r, sh / 2 + (ty - th / 2) · r)`. Samples outside the source clamp
/// to the edge. Writes every byte of `target`; nothing is allocated.
pub fn upscale_bilinear(source: &PixelBuffer, target: &mut PixelBuffer) {
    let (sw, sh) = source.dimensions();
    let (tw, th) = target.dimensions();
    if sw == 0 || sh == 0 || tw == 0 || th == 0 {
        return;
    }

    if (sw, sh) == (tw, th) {
        target.as_bytes_mut().copy_from_slice(source.as_bytes());
        return;
    }

    let src = source.as_bytes();
    let ratio = sw as f64 / tw as f64;
    let y_offset = sh as f64 / 2.0 - th as f64 / 2.0 * ratio;
    let max_x = (sw - 1) as f64;
    let max_y = (sh - 1) as f64;
    let row_len = tw as usize * CHANNELS;

    for (ty, row) in target.as_bytes_mut().chunks_exact_mut(row_len).enumerate() {
        let fy = (y_offset + ty as f64 * ratio).clamp(0.0, max_y);
        let y0 = fy.floor() as usize;
        let y1 = (y0 + 1).min(sh as usize - 1);
        let wy = fy - y0 as f64;

        for (tx, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let fx = (tx as f64 * ratio).min(max_x);
            let x0 = fx.floor() as usize;
            let x1 = (x0 + 1).min(sw as usize - 1);
            let wx = fx - x0 as f64;

            let at = |x: usize, y: usize| (y * sw as usize + x) * CHANNELS;
            let (i00, i10, i01, i11) = (at(x0, y0), at(x1, y0), at(x0, y1), at(x1, y1));

            for c in 0..CHANNELS {
                let top = src[i00 + c] as f64 * (1.0 - wx) + src[i10 + c] as f64 * wx;
                let bottom = src[i01 + c] as f64 * (1.0 - wx) + src[i11 + c] as f64 * wx;
                let v = top * (1.0 - wy) + bottom * wy;
                out[c] = v.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fractalscope_core::{PlaneMapping, ViewState};

    fn buffer_from(width: u32, height: u32, pixels: &[[u8; 4]]) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for (i, px) in pixels.iter().enumerate() {
            buffer.set_pixel(i as u32 % width, i as u32 / width, *px);
        }
        buffer
    }

    #[test]
    fn same_size_copies_exactly() {
        let source = buffer_from(
            2,
            2,
            &[[1, 2, 3, 255], [4, 5, 6, 255], [7, 8, 9, 255], [10, 11, 12, 255]],
        );
        let mut target = PixelBuffer::new(2, 2);
        upscale_bilinear(&source, &mut target);
        assert_eq!(target, source);
    }

    #[test]
    fn single_pixel_fills_target() {
        let source = buffer_from(1, 1, &[[42, 7, 200, 255]]);
        let mut target = PixelBuffer::new(16, 9);
        upscale_bilinear(&source, &mut target);
        assert!(target
            .as_bytes()
            .chunks_exact(4)
            .all(|px| px == &[42u8, 7, 200, 255][..]));
    }

    #[test]
    fn horizontal_gradient_interpolates() {
        // 2x1 black -> white, stretched to 4x1
        let source = buffer_from(2, 1, &[[0, 0, 0, 255], [200, 200, 200, 255]]);
        let mut target = PixelBuffer::new(4, 1);
        upscale_bilinear(&source, &mut target);
        // Sample positions 0, 0.5, 1, 1.5 (clamped to 1)
        assert_eq!(target.pixel(0, 0), [0, 0, 0, 255]);
        assert_eq!(target.pixel(1, 0), [100, 100, 100, 255]);
        assert_eq!(target.pixel(2, 0), [200, 200, 200, 255]);
        assert_eq!(target.pixel(3, 0), [200, 200, 200, 255]);
    }

    #[test]
    fn vertical_blend_is_centered() {
        // 2x2 -> 4x3 at ratio 0.5: rows sample 0.25, 0.75 and 1.25 (clamped)
        let top = [0, 0, 0, 255];
        let bottom = [0, 0, 100, 255];
        let source = buffer_from(2, 2, &[top, top, bottom, bottom]);
        let mut target = PixelBuffer::new(4, 3);
        upscale_bilinear(&source, &mut target);
        assert_eq!(target.pixel(0, 0), [0, 0, 25, 255]);
        assert_eq!(target.pixel(3, 1), [0, 0, 75, 255]);
        assert_eq!(target.pixel(1, 2), [0, 0, 100, 255]);
    }

    #[test]
    fn preview_rows_track_plane_mapping() {
        // 30x17 display with its 8x5 quarter pass: heights are not in the
        // same ratio as widths, so rows must follow the shared plane step
        let view = ViewState::new(-0.5, 0.0, 3.5);
        let (sw, sh, tw, th) = (8, 5, 30, 17);
        let preview = PlaneMapping::new(&view, sw, sh);
        let display = PlaneMapping::new(&view, tw, th);

        let rows: Vec<[u8; 4]> = (0..sh).map(|r| [0, 0, (r * 50) as u8, 255]).collect();
        let pixels: Vec<[u8; 4]> = rows
            .iter()
            .flat_map(|px| std::iter::repeat(*px).take(sw as usize))
            .collect();
        let source = buffer_from(sw, sh, &pixels);
        let mut target = PixelBuffer::new(tw, th);
        upscale_bilinear(&source, &mut target);

        for ty in 0..th {
            let plane_y = display.pixel_to_plane(0, ty).im;
            let row = ((plane_y - preview.y_min) / preview.step).clamp(0.0, (sh - 1) as f64);
            let expected = row * 50.0;
            let got = target.pixel(tw / 2, ty)[2] as f64;
            assert!(
                (got - expected).abs() <= 1.0,
                "row {ty}: got {got}, expected {expected:.2}"
            );
        }
    }

    #[test]
    fn preview_columns_track_plane_mapping() {
        let view = ViewState::new(0.3, -0.2, 2.0);
        let preview = PlaneMapping::new(&view, 8, 5);
        let display = PlaneMapping::new(&view, 30, 17);
        let pixels: Vec<[u8; 4]> = (0..40).map(|i| [(i % 8 * 30) as u8, 0, 0, 255]).collect();
        let source = buffer_from(8, 5, &pixels);
        let mut target = PixelBuffer::new(30, 17);
        upscale_bilinear(&source, &mut target);

        for tx in 0..30 {
            let plane_x = display.pixel_to_plane(tx, 8).re;
            let col = ((plane_x - preview.x_min) / preview.step).min(7.0);
            let got = target.pixel(tx, 8)[0] as f64;
            assert!((got - col * 30.0).abs() <= 1.0, "column {tx}");
        }
    }

    #[test]
    fn non_multiple_target_is_fully_written() {
        let source = buffer_from(3, 2, &[[255, 0, 0, 255]; 6]);
        let mut target = PixelBuffer::new(11, 7);
        target.fill([1, 1, 1, 1]);
        upscale_bilinear(&source, &mut target);
        assert!(target
            .as_bytes()
            .chunks_exact(4)
            .all(|px| px == &[255u8, 0, 0, 255][..]));
    }
}
