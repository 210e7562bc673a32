//! Contrast plates and the decorative border, blended onto the canvas.
//!
//! Geometry works on integer pixel coordinates; bounding boxes are inclusive.

use crate::palette::blend;
use image::{Rgb, RgbImage};

pub const PLATE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
pub const PLATE_ALPHA: u8 = 230;
pub const BORDER_ALPHA: u8 = 100;

/// Fraction of the canvas covered by the circular plate's diameter
pub const CIRCLE_RATIO: f32 = 0.6;
/// Rounded square padding and corner radius, as a fraction of the canvas
pub const ROUNDED_RATIO: f32 = 0.15;

/// Translucent disc of diameter `0.6 * size` with an opaque 1px rim
pub fn draw_circle_plate(img: &mut RgbImage) {
    let size = img.width();
    let diameter = (size as f32 * CIRCLE_RATIO) as u32;
    let pos = (size - diameter) / 2;
    let center = pos as f32 + diameter as f32 / 2.0;
    let radius = diameter as f32 / 2.0;

    paint(img, pos, pos + diameter, PLATE_COLOR, PLATE_ALPHA, |x, y| {
        distance(x, y, center, center) <= radius
    });
    paint(img, pos, pos + diameter, PLATE_COLOR, 255, |x, y| {
        let d = distance(x, y, center, center);
        d <= radius && d > radius - 1.0
    });
}

/// Translucent square inset by `0.15 * size` with corners of the same radius
pub fn draw_rounded_plate(img: &mut RgbImage) {
    let size = img.width();
    let padding = (size as f32 * ROUNDED_RATIO) as u32;
    let corner = (size as f32 * ROUNDED_RATIO) as u32;
    if padding * 2 > size {
        return;
    }
    let (low, high) = (padding, size - padding);

    // Centers of the corner arcs
    let inner_low = (low + corner).min(high) as f32;
    let inner_high = high.saturating_sub(corner).max(low) as f32;

    paint(img, low, high, PLATE_COLOR, PLATE_ALPHA, |x, y| {
        let qx = (x as f32).clamp(inner_low, inner_high);
        let qy = (y as f32).clamp(inner_low, inner_high);
        distance(x, y, qx, qy) <= corner as f32
    });
}

/// Ring inscribed in `[width, size - width]`, `width` pixels thick
pub fn draw_border_ring(img: &mut RgbImage, width: u32) {
    let size = img.width();
    if width * 2 >= size {
        return;
    }
    let center = size as f32 / 2.0;
    let outer = (size - 2 * width) as f32 / 2.0;
    let inner = outer - width as f32;

    paint(img, width, size - width, PLATE_COLOR, BORDER_ALPHA, |x, y| {
        let d = distance(x, y, center, center);
        d <= outer && d > inner
    });
}

fn distance(x: u32, y: u32, cx: f32, cy: f32) -> f32 {
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    (dx * dx + dy * dy).sqrt()
}

/// Blend `color` over every pixel of the square `[low, high]` accepted by `inside`
fn paint<F>(img: &mut RgbImage, low: u32, high: u32, color: Rgb<u8>, alpha: u8, inside: F)
where
    F: Fn(u32, u32) -> bool,
{
    let high = high.min(img.width().saturating_sub(1));
    for y in low..=high {
        for x in low..=high {
            if inside(x, y) {
                let pixel = img.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color, alpha);
            }
        }
    }
}
