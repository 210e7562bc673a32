//! Background generators.
//!
//! Every generator returns a fresh `size x size` RGB canvas.

use crate::palette::lerp;
use image::{Rgb, RgbImage};

/// Fraction of the canvas size covered by the radial gradient's outermost disc
pub const RADIAL_EXTENT: f32 = 0.7;

/// Top-to-bottom blend: row `y` is `lerp(start, end, y / size)`
pub fn linear_gradient(size: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    let rows: Vec<Rgb<u8>> = (0..size)
        .map(|y| lerp(start, end, y as f32 / size as f32))
        .collect();

    RgbImage::from_fn(size, size, |_, y| rows[y as usize])
}

/// Center-outward blend from `end` at the center to `start` at `max_radius`.
///
/// Equivalent to painting filled discs of decreasing radius `r` (from
/// `max_radius` down to 0) in `lerp(start, end, 1 - r / max_radius)`: each pixel
/// ends up with the color of the smallest disc covering it. Pixels outside the
/// largest disc keep the `start` pre-fill.
pub fn radial_gradient(size: u32, start: Rgb<u8>, end: Rgb<u8>) -> RgbImage {
    let center = (size / 2) as i64;
    let max_radius = radial_max_radius(size);

    RgbImage::from_fn(size, size, |x, y| {
        let dx = x as i64 - center;
        let dy = y as i64 - center;
        let radius = covering_radius((dx * dx + dy * dy) as u64);

        if radius > max_radius as u64 {
            start
        } else if max_radius == 0 {
            end
        } else {
            lerp(start, end, 1.0 - radius as f32 / max_radius as f32)
        }
    })
}

/// Single color canvas
pub fn flat_fill(size: u32, color: Rgb<u8>) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

pub fn radial_max_radius(size: u32) -> u32 {
    (size as f32 * RADIAL_EXTENT) as u32
}

/// Smallest integer `r` with `r * r >= distance_sq`
fn covering_radius(distance_sq: u64) -> u64 {
    let mut r = (distance_sq as f64).sqrt().ceil() as u64;
    while r * r < distance_sq {
        r += 1;
    }
    while r > 0 && (r - 1) * (r - 1) >= distance_sq {
        r -= 1;
    }
    r
}
