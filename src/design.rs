use crate::palette::Palette;
use clap::ValueEnum;
use image::Rgb;
use std::fmt;

const SHADOW_GRAY: Rgb<u8> = Rgb([100, 100, 100]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Layout template selecting the background, plate and text treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Design {
    /// Linear gradient, translucent disc, decorative border ring
    #[default]
    Circular,
    /// Linear gradient with a translucent rounded square
    Rounded,
    /// Flat fill, white text only
    Minimal,
    /// Center-outward gradient, white text
    Radial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Linear,
    Radial,
    Flat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plate {
    Circle,
    RoundedSquare,
}

/// Shadow color and its coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shadow {
    pub color: Rgb<u8>,
    pub alpha: u8,
}

impl Design {
    pub fn background(self) -> Background {
        match self {
            Design::Circular | Design::Rounded => Background::Linear,
            Design::Minimal => Background::Flat,
            Design::Radial => Background::Radial,
        }
    }

    pub fn plate(self) -> Option<Plate> {
        match self {
            Design::Circular => Some(Plate::Circle),
            Design::Rounded => Some(Plate::RoundedSquare),
            Design::Minimal | Design::Radial => None,
        }
    }

    pub fn has_border(self) -> bool {
        self == Design::Circular
    }

    /// Palette as fed to the background; radial runs from the end color at the
    /// rim to the start color at the center
    pub fn background_palette(self, palette: Palette) -> Palette {
        match self {
            Design::Radial => palette.reversed(),
            _ => palette,
        }
    }

    pub fn text_color(self, palette: Palette) -> Rgb<u8> {
        match self.plate() {
            Some(_) => palette.start,
            None => WHITE,
        }
    }

    pub fn text_shadow(self) -> Option<Shadow> {
        match self {
            Design::Circular | Design::Rounded => Some(Shadow {
                color: SHADOW_GRAY,
                alpha: 255,
            }),
            Design::Radial => Some(Shadow {
                color: BLACK,
                alpha: 128,
            }),
            Design::Minimal => None,
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}
