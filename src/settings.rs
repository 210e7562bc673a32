use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Tunable constants of the composition pipeline
///
/// Defaults reproduce the stock icon look. A JSON file may override any subset:
///
/// ```json
/// { "text_bias": 0.03, "font_paths": ["/opt/fonts/Inter-Bold.ttf"] }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ComposerSettings {
    /// Font pixel size as a fraction of the canvas
    pub font_scale: f32,
    /// Upward nudge of text sitting on a plate, as a fraction of the canvas
    pub text_bias: f32,
    pub shadow_min: u32,
    pub shadow_divisor: u32,
    pub border_min: u32,
    pub border_divisor: u32,
    /// Font files probed in order; the first that loads wins
    pub font_paths: Vec<PathBuf>,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            font_scale: 0.4,
            text_bias: 0.02,
            shadow_min: 2,
            shadow_divisor: 100,
            border_min: 2,
            border_divisor: 50,
            font_paths: default_font_paths(),
        }
    }
}

impl ComposerSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn font_px(&self, size: u32) -> u32 {
        (size as f32 * self.font_scale) as u32
    }

    pub fn text_bias_px(&self, size: u32) -> i32 {
        (size as f32 * self.text_bias) as i32
    }

    /// A zero divisor leaves only the minimum
    pub fn shadow_offset(&self, size: u32) -> u32 {
        self.shadow_min
            .max(size.checked_div(self.shadow_divisor).unwrap_or(0))
    }

    /// A zero divisor leaves only the minimum
    pub fn border_width(&self, size: u32) -> u32 {
        self.border_min
            .max(size.checked_div(self.border_divisor).unwrap_or(0))
    }
}

#[cfg(target_os = "windows")]
fn default_font_paths() -> Vec<PathBuf> {
    [
        "C:\\Windows\\Fonts\\arial.ttf",
        "C:\\Windows\\Fonts\\arialbd.ttf",
        "C:\\Windows\\Fonts\\calibri.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(target_os = "macos")]
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/System/Library/Fonts/Helvetica.ttc",
        "/Library/Fonts/Arial.ttf",
        "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
        "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}
