//! Static raster export of the committed drawing.
//!
//! Only committed commands are replayed: never the preview, never the redo
//! buffer. Replay goes through the same `display` calls as the canvas, at a
//! uniform scale.

use std::io::Cursor;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use crate::config::SketchpadConfig;
use crate::document::Document;
use crate::error::SketchResult;
use crate::surface::RasterSurface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    /// Side length of the square canvas in surface units
    pub canvas_size: u32,
    pub scale: f32,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from(&SketchpadConfig::default())
    }
}

impl From<&SketchpadConfig> for ExportOptions {
    fn from(config: &SketchpadConfig) -> Self {
        Self {
            canvas_size: config.canvas_size,
            scale: config.export_scale,
        }
    }
}

/// Replay the committed drawing into an image `canvas_size * scale` pixels square
pub fn render_image(document: &Document, options: &ExportOptions) -> SketchResult<RgbaImage> {
    let side = options.canvas_size;
    let mut surface = RasterSurface::new(side, side, options.scale)?;
    document.replay(&mut surface);
    surface.finish()
}

pub fn encode_png(image: &RgbaImage) -> SketchResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Render and encode in one go
pub fn export_png(document: &Document, options: &ExportOptions) -> SketchResult<Vec<u8>> {
    let image = render_image(document, options)?;
    encode_png(&image)
}

/// Render the drawing and write it to `path` as a PNG
#[cfg(not(target_arch = "wasm32"))]
pub fn save_png(document: &Document, options: &ExportOptions, path: &Path) -> SketchResult<()> {
    let bytes = export_png(document, options)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes)?;
    log::info!(
        "Exported {} command(s) to {} ({} bytes)",
        document.len(),
        path.display(),
        bytes.len()
    );
    Ok(())
}
