//! Pixel classification and physical-area aggregation.
//!
//! A pixel is covered iff its first color channel is not the background
//! value. Classification is binary: anti-aliased edge pixels are counted
//! whole, a bias that shrinks as the supersampling scale grows.

use frontal_raster::{Framebuffer, BACKGROUND};

/// Physical area of one pixel, in squared mesh units.
///
/// The orthographic frame spans `2 * parallel_scale` in each direction under
/// the square-frame convention, so the full frame covers
/// `(2 * parallel_scale)^2` physical area spread over `width^2` pixels.
/// The constant factor is calibrated against the half-extent auto-fit of
/// [`OrthoCamera::reset_to_bounds`](frontal_raster::OrthoCamera::reset_to_bounds).
pub fn resolution(parallel_scale: f64, width: u32) -> f64 {
    parallel_scale * parallel_scale * 4.0 / (width as f64 * width as f64)
}

/// Covered-pixel count via a bulk predicate over the raw buffer.
///
/// This is the default counting path. [`count_covered_scan`] is the explicit
/// per-pixel equivalent; both must agree exactly on any buffer.
pub fn count_covered(fb: &Framebuffer) -> usize {
    fb.pixels()
        .chunks_exact(4)
        .filter(|px| px[0] != BACKGROUND[0])
        .count()
}

/// Covered-pixel count via an explicit row-by-row scan.
pub fn count_covered_scan(fb: &Framebuffer) -> usize {
    let mut count = 0;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            if fb.pixel(x, y)[0] != BACKGROUND[0] {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontal_raster::SILHOUETTE;

    #[test]
    fn test_resolution_formula() {
        // Scale 0.5 over a 100px frame: frame is 1x1 units, 1e-4 per pixel
        let r = resolution(0.5, 100);
        assert!((r - 1e-4).abs() < 1e-18);
    }

    #[test]
    fn test_empty_buffer_counts_zero() {
        let fb = Framebuffer::new(8, 8).unwrap();
        assert_eq!(count_covered(&fb), 0);
        assert_eq!(count_covered_scan(&fb), 0);
    }

    #[test]
    fn test_counts_marked_pixels() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.set_pixel(0, 0, SILHOUETTE);
        fb.set_pixel(7, 7, SILHOUETTE);
        fb.set_pixel(3, 5, SILHOUETTE);
        assert_eq!(count_covered(&fb), 3);
    }

    #[test]
    fn test_any_non_background_first_channel_counts() {
        // 254 in the first channel is covered even though it is nearly white
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(1, 1, [254, 255, 255, 255]);
        assert_eq!(count_covered(&fb), 1);
        assert_eq!(count_covered_scan(&fb), 1);
    }

    #[test]
    fn test_other_channels_are_ignored() {
        // Only the first channel participates in classification
        let mut fb = Framebuffer::new(4, 4).unwrap();
        fb.set_pixel(2, 2, [255, 0, 0, 0]);
        assert_eq!(count_covered(&fb), 0);
    }

    #[test]
    fn test_scan_matches_bulk_on_patterned_buffer() {
        let mut fb = Framebuffer::new(33, 33).unwrap();
        for y in 0..33 {
            for x in 0..33 {
                if (x * 7 + y * 13) % 3 == 0 {
                    fb.set_pixel(x, y, SILHOUETTE);
                }
            }
        }
        assert_eq!(count_covered(&fb), count_covered_scan(&fb));
    }
}
