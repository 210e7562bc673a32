//! Font resolution and glyph rasterization.
//!
//! A missing or unreadable font is never an error: the resolver simply yields
//! nothing and rendering falls back to the built-in bitmap font.

use crate::{bitmap_font, palette::blend, settings::ComposerSettings};
use image::{Rgb, RgbImage};
use rusttype::{point, Font, PositionedGlyph, Scale};
use std::path::{Path, PathBuf};

/// Probes an ordered list of font files
#[derive(Debug, Clone, Default)]
pub struct FontResolver {
    candidates: Vec<PathBuf>,
}

impl FontResolver {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Candidates from `settings`, with `preferred` probed first
    pub fn from_settings(settings: &ComposerSettings, preferred: Option<&Path>) -> Self {
        let candidates = preferred
            .map(Path::to_path_buf)
            .into_iter()
            .chain(settings.font_paths.iter().cloned())
            .collect();
        Self::new(candidates)
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// First candidate that exists and parses as a TrueType/OpenType font
    pub fn resolve(&self) -> Option<Font<'static>> {
        self.candidates.iter().find_map(|path| load_font(path))
    }

    pub fn typeface(&self) -> Typeface {
        match self.resolve() {
            Some(font) => Typeface::Vector(font),
            None => {
                log::debug!(
                    "No usable font among {} candidates, using bitmap font",
                    self.candidates.len()
                );
                Typeface::Bitmap
            }
        }
    }
}

fn load_font(path: &Path) -> Option<Font<'static>> {
    if !path.exists() {
        log::trace!("Font candidate {} does not exist", path.display());
        return None;
    }

    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            log::debug!("Can't read font {}: {err}", path.display());
            return None;
        }
    };

    match Font::try_from_vec(data) {
        Some(font) => {
            log::debug!("Using font {}", path.display());
            Some(font)
        }
        None => {
            log::debug!("Font {} could not be parsed", path.display());
            None
        }
    }
}

/// Ink bounding box of rendered text relative to its pen origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

/// A resolved font, or the built-in fallback
pub enum Typeface {
    Vector(Font<'static>),
    Bitmap,
}

impl Typeface {
    pub fn is_bitmap(&self) -> bool {
        matches!(self, Typeface::Bitmap)
    }

    /// Bounding box of `text` for a `canvas` sized icon at `font_px`.
    ///
    /// The bitmap font reports a coarse `canvas / 4` square instead of its
    /// real extent.
    pub fn measure(&self, text: &str, canvas: u32, font_px: u32) -> InkBox {
        match self {
            Typeface::Vector(font) => {
                let glyphs = layout(font, text, font_px, 0, 0);
                let mut bounds: Option<(i32, i32, i32, i32)> = None;
                for bb in glyphs.iter().filter_map(PositionedGlyph::pixel_bounding_box) {
                    bounds = Some(match bounds {
                        None => (bb.min.x, bb.min.y, bb.max.x, bb.max.y),
                        Some((x0, y0, x1, y1)) => (
                            x0.min(bb.min.x),
                            y0.min(bb.min.y),
                            x1.max(bb.max.x),
                            y1.max(bb.max.y),
                        ),
                    });
                }

                match bounds {
                    Some((x0, y0, x1, y1)) => InkBox {
                        left: x0,
                        top: y0,
                        width: x1 - x0,
                        height: y1 - y0,
                    },
                    None => InkBox {
                        left: 0,
                        top: 0,
                        width: 0,
                        height: 0,
                    },
                }
            }
            Typeface::Bitmap => {
                let side = (canvas / 4) as i32;
                InkBox {
                    left: 0,
                    top: 0,
                    width: side,
                    height: side,
                }
            }
        }
    }

    /// Draw `text` so that its ink box starts at `(x, y)`
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        img: &mut RgbImage,
        text: &str,
        font_px: u32,
        ink: InkBox,
        (x, y): (i32, i32),
        color: Rgb<u8>,
        alpha: u8,
    ) {
        match self {
            Typeface::Vector(font) => {
                for glyph in layout(font, text, font_px, x - ink.left, y - ink.top) {
                    let Some(bb) = glyph.pixel_bounding_box() else {
                        continue;
                    };
                    glyph.draw(|gx, gy, coverage| {
                        let coverage = (alpha as f32 * coverage).round() as u8;
                        put(img, bb.min.x + gx as i32, bb.min.y + gy as i32, color, coverage);
                    });
                }
            }
            Typeface::Bitmap => {
                let cell = bitmap_scale(img.width());
                let mut pen_x = x;
                for c in text.chars() {
                    draw_bitmap_glyph(img, c, (pen_x, y), cell, color, alpha);
                    pen_x += (bitmap_font::ADVANCE * cell) as i32;
                }
            }
        }
    }
}

/// Cell size of the bitmap font, chosen so a glyph is about `canvas / 4` tall
pub fn bitmap_scale(canvas: u32) -> u32 {
    (canvas / 4 / bitmap_font::CELL_HEIGHT).max(1)
}

fn layout<'f>(
    font: &'f Font<'static>,
    text: &str,
    font_px: u32,
    dx: i32,
    dy: i32,
) -> Vec<PositionedGlyph<'f>> {
    let scale = Scale::uniform(font_px as f32);
    let ascent = font.v_metrics(scale).ascent;
    font.layout(text, scale, point(dx as f32, dy as f32 + ascent))
        .collect()
}

fn draw_bitmap_glyph(
    img: &mut RgbImage,
    c: char,
    (x, y): (i32, i32),
    cell: u32,
    color: Rgb<u8>,
    alpha: u8,
) {
    for row in 0..bitmap_font::CELL_HEIGHT {
        for col in 0..bitmap_font::CELL_WIDTH {
            if !bitmap_font::is_set(c, col, row) {
                continue;
            }
            let cx = x + (col * cell) as i32;
            let cy = y + (row * cell) as i32;
            for py in 0..cell as i32 {
                for px in 0..cell as i32 {
                    put(img, cx + px, cy + py, color, alpha);
                }
            }
        }
    }
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>, alpha: u8) {
    if alpha == 0 || x < 0 || y < 0 || x >= img.width() as i32 || y >= img.height() as i32 {
        return;
    }
    let pixel = img.get_pixel_mut(x as u32, y as u32);
    *pixel = blend(*pixel, color, alpha);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_candidates_resolve_to_nothing() {
        let resolver = FontResolver::new(vec![PathBuf::from("/nonexistent/font.ttf")]);
        assert!(resolver.resolve().is_none());
        assert!(resolver.typeface().is_bitmap());
    }

    #[test]
    fn preferred_font_is_probed_first() {
        let settings = ComposerSettings {
            font_paths: vec![PathBuf::from("/b.ttf")],
            ..ComposerSettings::default()
        };
        let resolver = FontResolver::from_settings(&settings, Some(Path::new("/a.ttf")));
        assert_eq!(
            resolver.candidates(),
            &[PathBuf::from("/a.ttf"), PathBuf::from("/b.ttf")]
        );
    }

    #[test]
    fn bitmap_measure_uses_quarter_canvas() {
        let ink = Typeface::Bitmap.measure("Hello", 192, 76);
        assert_eq!((ink.width, ink.height), (48, 48));
    }

    #[test]
    fn bitmap_draw_clips_at_canvas_edges() {
        let mut img = RgbImage::new(8, 8);
        let ink = Typeface::Bitmap.measure("MM", 8, 3);
        Typeface::Bitmap.draw(&mut img, "MM", 3, ink, (-4, 5), Rgb([255, 0, 0]), 255);
        assert_eq!(*img.get_pixel(0, 5), Rgb([255, 0, 0]));
    }
}
