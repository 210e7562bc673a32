use crate::{
    design::{Background, Design, Plate},
    font::{FontResolver, Typeface},
    gradient::{flat_fill, linear_gradient, radial_gradient},
    palette::Palette,
    settings::ComposerSettings,
    shapes::{draw_border_ring, draw_circle_plate, draw_rounded_plate},
    text::{draw_centered_text, TextStyle},
};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Everything needed to produce one batch of icons
#[derive(Debug)]
pub struct Args {
    pub text: String,
    pub palette: Palette,
    pub design: Design,
    pub sizes: Vec<u32>,
    pub output: PathBuf,
    pub font: Option<PathBuf>,
    pub settings: ComposerSettings,
}

/// Composes icons for one text/palette/design combination at any size
pub struct IconComposer {
    text: String,
    palette: Palette,
    design: Design,
    settings: ComposerSettings,
    typeface: Typeface,
}

impl IconComposer {
    pub fn new(
        text: impl Into<String>,
        palette: Palette,
        design: Design,
        settings: ComposerSettings,
        typeface: Typeface,
    ) -> Self {
        Self {
            text: text.into(),
            palette,
            design,
            settings,
            typeface,
        }
    }

    /// Composer using the first loadable font from `settings` (or `preferred`)
    pub fn with_resolved_font(
        text: impl Into<String>,
        palette: Palette,
        design: Design,
        settings: ComposerSettings,
        preferred: Option<&Path>,
    ) -> Self {
        let typeface = FontResolver::from_settings(&settings, preferred).typeface();
        Self::new(text, palette, design, settings, typeface)
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    /// Render a `size x size` icon
    pub fn render(&self, size: u32) -> RgbImage {
        let palette = self.design.background_palette(self.palette);
        let mut img = match self.design.background() {
            Background::Linear => linear_gradient(size, palette.start, palette.end),
            Background::Radial => radial_gradient(size, palette.start, palette.end),
            Background::Flat => flat_fill(size, palette.start),
        };

        let plate = self.design.plate();
        match plate {
            Some(Plate::Circle) => draw_circle_plate(&mut img),
            Some(Plate::RoundedSquare) => draw_rounded_plate(&mut img),
            None => {}
        }

        let style = TextStyle {
            color: self.design.text_color(self.palette),
            shadow: self.design.text_shadow(),
            shadow_offset: self.settings.shadow_offset(size),
            bias: if plate.is_some() {
                self.settings.text_bias_px(size)
            } else {
                0
            },
        };
        draw_centered_text(
            &mut img,
            &self.typeface,
            &self.text,
            self.settings.font_px(size),
            &style,
        );

        if self.design.has_border() {
            draw_border_ring(&mut img, self.settings.border_width(size));
        }

        img
    }

    /// Render and encode a `size x size` icon as PNG bytes
    pub fn render_png(&self, size: u32) -> Result<Vec<u8>> {
        let img = self.render(size);
        let mut buf = Vec::new();
        write_png(img.as_raw(), &mut buf, size)?;
        Ok(buf)
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon-{size}x{size}.png")
}

/// Render every requested size into `args.output`, stopping at the first failure
pub fn generate_icons(args: Args) -> Result<Vec<PathBuf>> {
    let composer = IconComposer::with_resolved_font(
        args.text,
        args.palette,
        args.design,
        args.settings,
        args.font.as_deref(),
    );
    if composer.typeface().is_bitmap() {
        log::info!("No font file found, falling back to the built-in bitmap font");
    }

    create_dir_all(&args.output).with_context(|| {
        format!("Can't create output directory {}", args.output.display())
    })?;

    let mut written = Vec::with_capacity(args.sizes.len());
    for &size in &args.sizes {
        let filename = icon_file_name(size);
        let output_path = args.output.join(&filename);
        save_png(&composer.render(size), &output_path)?;

        let kb = std::fs::metadata(&output_path)
            .with_context(|| format!("Failed to stat {}", output_path.display()))?
            .len() as f64
            / 1024.0;
        println!("  ✓ Created {filename} ({kb:.1} KB)");
        written.push(output_path);
    }

    Ok(written)
}

fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write_png(img.as_raw(), &mut out, img.width())?;
    out.flush()
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    Ok(())
}

// Encode RGB image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(image_data, size, size, ColorType::Rgb8)
        .context("Failed to encode PNG")?;
    Ok(())
}
