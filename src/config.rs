use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::command::{PREVIEW_OPACITY, STICKER_SIZE};
use crate::error::{SketchError, SketchResult};

const MIN_CANVAS_SIZE: u32 = 16;
/// At the largest export scale this stays within the raster export limit
const MAX_CANVAS_SIZE: u32 = 1024;

/// Sketchpad settings. Persisted through eframe storage and loadable from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct SketchpadConfig {
    /// Side length of the square canvas, in surface units
    pub canvas_size: u32,
    /// Uniform upscale factor applied on export
    pub export_scale: f32,
    /// Thickness of the "Fine Brush" marker
    pub thin_thickness: f32,
    /// Thickness of the "Bold Brush" marker
    pub thick_thickness: f32,
    /// Stickers available at startup, in display order
    pub default_stickers: Vec<String>,
    /// Pick a fresh stroke color / sticker rotation on every tool selection
    pub randomize_cosmetics: bool,
    pub sticker_size: f32,
    pub preview_opacity: f32,
    pub export_dir: PathBuf,
    pub export_file_name: String,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: 256,
            export_scale: 4.0,
            thin_thickness: 3.0,
            thick_thickness: 10.0,
            default_stickers: vec!["💾".to_owned(), "🎮".to_owned(), "🧠".to_owned()],
            randomize_cosmetics: true,
            sticker_size: STICKER_SIZE,
            preview_opacity: PREVIEW_OPACITY,
            export_dir: PathBuf::from("."),
            export_file_name: "sketchpad.png".to_owned(),
        }
    }
}

impl SketchpadConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.validate_and_clamp()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SketchResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects values nothing sensible can be derived from and clamps the rest
    pub fn validate_and_clamp(&mut self) -> SketchResult<()> {
        if self.canvas_size == 0 {
            return Err(SketchError::InvalidConfig(
                "canvas_size must be at least 1".to_owned(),
            ));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(SketchError::InvalidConfig(
                "export_file_name must not be empty".to_owned(),
            ));
        }

        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&self.canvas_size) {
            log::warn!(
                "Invalid canvas_size {}, clamping to {MIN_CANVAS_SIZE}-{MAX_CANVAS_SIZE} range",
                self.canvas_size
            );
            self.canvas_size = self.canvas_size.clamp(MIN_CANVAS_SIZE, MAX_CANVAS_SIZE);
        }

        if !(1.0..=16.0).contains(&self.export_scale) {
            log::warn!(
                "Invalid export_scale {:.1}, clamping to 1.0-16.0 range",
                self.export_scale
            );
            self.export_scale = clamp_or(self.export_scale, 1.0, 16.0, 4.0);
        }

        for (name, thickness) in [
            ("thin_thickness", &mut self.thin_thickness),
            ("thick_thickness", &mut self.thick_thickness),
        ] {
            if !(0.5..=100.0).contains(&*thickness) {
                log::warn!("Invalid {name} {thickness:.1}, clamping to 0.5-100.0 range");
                *thickness = clamp_or(*thickness, 0.5, 100.0, 3.0);
            }
        }

        if !(4.0..=256.0).contains(&self.sticker_size) {
            log::warn!(
                "Invalid sticker_size {:.1}, clamping to 4.0-256.0 range",
                self.sticker_size
            );
            self.sticker_size = clamp_or(self.sticker_size, 4.0, 256.0, STICKER_SIZE);
        }

        if !(0.0..=1.0).contains(&self.preview_opacity) {
            log::warn!(
                "Invalid preview_opacity {:.2}, clamping to 0.0-1.0",
                self.preview_opacity
            );
            self.preview_opacity = clamp_or(self.preview_opacity, 0.0, 1.0, PREVIEW_OPACITY);
        }

        let before = self.default_stickers.len();
        self.default_stickers.retain(|glyph| !glyph.trim().is_empty());
        if self.default_stickers.len() != before {
            log::warn!(
                "Dropped {} empty default sticker(s)",
                before - self.default_stickers.len()
            );
        }

        Ok(())
    }

    /// Where an export lands on disk
    pub fn export_path(&self) -> PathBuf {
        self.export_dir.join(&self.export_file_name)
    }
}

/// NaN has no nearest valid value, so it falls back to the default
fn clamp_or(value: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
