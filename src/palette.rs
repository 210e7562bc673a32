//! Named color palettes and the color interpolation shared by every background.

use anyhow::{Context, Result};
use clap::ValueEnum;
use image::Rgb;
use std::{fmt, str::FromStr};

/// Ordered pair of colors a gradient blends between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub start: Rgb<u8>,
    pub end: Rgb<u8>,
}

impl Palette {
    pub const fn new(start: [u8; 3], end: [u8; 3]) -> Self {
        Self {
            start: Rgb(start),
            end: Rgb(end),
        }
    }

    /// The same palette with its ends swapped
    pub fn reversed(self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// Replace either end with a CSS color (`#10b981`, `rgb(...)`, `teal`, ...)
    pub fn with_overrides(mut self, start: Option<&str>, end: Option<&str>) -> Result<Self> {
        if let Some(color) = start {
            self.start = parse_css_color(color)?;
        }
        if let Some(color) = end {
            self.end = parse_css_color(color)?;
        }
        Ok(self)
    }
}

/// Named color style applied to a design
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Purple to blue
    #[default]
    Gradient,
    Green,
    Red,
    Orange,
    Pink,
    Dark,
}

impl Style {
    pub fn palette(self) -> Palette {
        match self {
            Style::Gradient => Palette::new([139, 92, 246], [59, 130, 246]),
            Style::Green => Palette::new([16, 185, 129], [5, 150, 105]),
            Style::Red => Palette::new([239, 68, 68], [220, 38, 38]),
            Style::Orange => Palette::new([251, 146, 60], [249, 115, 22]),
            Style::Pink => Palette::new([236, 72, 153], [219, 39, 119]),
            Style::Dark => Palette::new([31, 41, 55], [17, 24, 39]),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Blend `from` towards `to` by `t` (0.0 gives `from`, 1.0 gives `to`)
pub fn lerp(from: Rgb<u8>, to: Rgb<u8>, t: f32) -> Rgb<u8> {
    let t = t.clamp(0.0, 1.0);
    let channel = |a: u8, b: u8| {
        let a = a as f32;
        let b = b as f32;
        (a + (b - a) * t).round() as u8
    };

    Rgb([
        channel(from[0], to[0]),
        channel(from[1], to[1]),
        channel(from[2], to[2]),
    ])
}

/// Source-over blend of `src` with coverage `alpha` (0-255) onto an opaque pixel
pub fn blend(dst: Rgb<u8>, src: Rgb<u8>, alpha: u8) -> Rgb<u8> {
    let a = alpha as u32;
    let channel = |d: u8, s: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;

    Rgb([
        channel(dst[0], src[0]),
        channel(dst[1], src[1]),
        channel(dst[2], src[2]),
    ])
}

fn parse_css_color(color: &str) -> Result<Rgb<u8>> {
    let parsed = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow::anyhow!("Invalid CSS color: {color}"))
        .context("Failed to parse palette override")?;

    Ok(Rgb([
        (parsed.red * 255.).round() as u8,
        (parsed.green * 255.).round() as u8,
        (parsed.blue * 255.).round() as u8,
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_both_ends() {
        let palette = Style::Green.palette();
        assert_eq!(lerp(palette.start, palette.end, 0.0), palette.start);
        assert_eq!(lerp(palette.start, palette.end, 1.0), palette.end);
    }

    #[test]
    fn blend_extremes() {
        let dst = Rgb([10, 20, 30]);
        let src = Rgb([200, 100, 50]);
        assert_eq!(blend(dst, src, 0), dst);
        assert_eq!(blend(dst, src, 255), src);
    }

    #[test]
    fn css_overrides_replace_palette_ends() {
        let palette = Style::Gradient
            .palette()
            .with_overrides(Some("#ff0000"), None)
            .unwrap();
        assert_eq!(palette.start, Rgb([255, 0, 0]));
        assert_eq!(palette.end, Style::Gradient.palette().end);

        assert!(Style::Gradient
            .palette()
            .with_overrides(None, Some("not-a-color"))
            .is_err());
    }

    #[test]
    fn style_names_match_cli_values() {
        assert_eq!(Style::Gradient.to_string(), "gradient");
        assert_eq!(Style::from_str("pink", true).unwrap(), Style::Pink);
    }
}
