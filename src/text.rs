use crate::{
    design::Shadow,
    font::{InkBox, Typeface},
};
use image::{Rgb, RgbImage};

/// Where the measured text lands on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayout {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Top-left origin that centers a `width x height` box on a `canvas` square,
/// lifted by `bias` pixels. Negative when the box overflows the canvas.
pub fn centered_origin(canvas: u32, width: i32, height: i32, bias: i32) -> (i32, i32) {
    let canvas = canvas as i32;
    (
        (canvas - width).div_euclid(2),
        (canvas - height).div_euclid(2) - bias,
    )
}

pub fn layout_text(ink: InkBox, canvas: u32, bias: i32) -> GlyphLayout {
    let (x, y) = centered_origin(canvas, ink.width, ink.height, bias);
    GlyphLayout {
        x,
        y,
        width: ink.width,
        height: ink.height,
    }
}

/// How the text layer is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgb<u8>,
    pub shadow: Option<Shadow>,
    pub shadow_offset: u32,
    /// Upward nudge in pixels
    pub bias: i32,
}

/// Measure, center and draw `text` with its optional drop shadow
pub fn draw_centered_text(
    img: &mut RgbImage,
    typeface: &Typeface,
    text: &str,
    font_px: u32,
    style: &TextStyle,
) -> GlyphLayout {
    let canvas = img.width();
    let ink = typeface.measure(text, canvas, font_px);
    let layout = layout_text(ink, canvas, style.bias);
    log::trace!("Text {text:?} on {canvas}px canvas: {layout:?}");

    if let Some(shadow) = style.shadow {
        let offset = style.shadow_offset as i32;
        typeface.draw(
            img,
            text,
            font_px,
            ink,
            (layout.x + offset, layout.y + offset),
            shadow.color,
            shadow.alpha,
        );
    }
    typeface.draw(img, text, font_px, ink, (layout.x, layout.y), style.color, 255);

    layout
}
