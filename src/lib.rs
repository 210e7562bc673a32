//! Gradient PWA icon generator.
//!
//! [`icon_gen::IconComposer`] renders one text/palette/design combination at
//! any size; [`icon_gen::generate_icons`] writes a batch of sizes to disk.

pub mod bitmap_font;
pub mod design;
pub mod font;
pub mod gradient;
pub mod icon_gen;
pub mod palette;
pub mod settings;
pub mod shapes;
pub mod text;

pub use design::Design;
pub use icon_gen::{generate_icons, Args, IconComposer};
pub use palette::{Palette, Style};
pub use settings::ComposerSettings;
