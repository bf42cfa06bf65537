use egui::epaint::text::{FontDefinitions, Fonts};
use egui::{Color32, FontId, Galley, Pos2};
use image::RgbaImage;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint,
    Transform,
};

use super::Surface;
use crate::error::{SketchError, SketchResult};
use crate::style::StrokeStyle;

const MAX_TEXTURE_SIDE: usize = 4096;
/// Largest export edge in pixels
pub const MAX_PIXEL_SIDE: u32 = 16384;

/// An offscreen surface that rasterizes into an RGBA image.
///
/// Commands draw in logical (surface-local) units exactly like on screen;
/// every path is mapped through a uniform `scale` transform. Paths go through
/// tiny-skia, glyphs are laid out by epaint and their atlas coverage is
/// composited in.
pub struct RasterSurface {
    pixmap: Pixmap,
    fonts: Fonts,
    scale: f32,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl RasterSurface {
    /// `width`/`height` are in logical units; the image is `scale` times larger
    pub fn new(width: u32, height: u32, scale: f32) -> SketchResult<Self> {
        // epaint only lays out text for 0 < scale < 100
        if !(scale.is_finite() && scale > 0.0 && scale < 100.0) {
            return Err(SketchError::Export(format!(
                "scale {scale} is outside the supported range"
            )));
        }
        let [pixel_width, pixel_height] = pixel_size(width, height, scale);
        if pixel_width == 0 || pixel_height == 0 {
            return Err(SketchError::Export(format!(
                "cannot rasterize a {pixel_width}x{pixel_height} image"
            )));
        }
        if pixel_width > MAX_PIXEL_SIDE || pixel_height > MAX_PIXEL_SIDE {
            return Err(SketchError::Export(format!(
                "{pixel_width}x{pixel_height} exceeds the {MAX_PIXEL_SIDE}px export limit"
            )));
        }
        let pixmap = Pixmap::new(pixel_width, pixel_height).ok_or_else(|| {
            SketchError::Export(format!("failed to allocate {pixel_width}x{pixel_height}"))
        })?;

        Ok(Self {
            pixmap,
            fonts: Fonts::new(scale, MAX_TEXTURE_SIDE, FontDefinitions::default()),
            scale,
        })
    }

    /// Output size in pixels
    pub fn pixel_size(&self) -> [u32; 2] {
        [self.pixmap.width(), self.pixmap.height()]
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    pub fn finish(self) -> SketchResult<RgbaImage> {
        let [width, height] = self.pixel_size();
        let bytes: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let c = pixel.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        log::debug!("Rasterized {width}x{height}");
        RgbaImage::from_raw(width, height, bytes)
            .ok_or_else(|| SketchError::Export("pixel buffer size mismatch".to_owned()))
    }

    /// Copy a galley's glyph coverage out of the font atlas, unrotated, at pixel scale
    fn glyph_pixmap(&self, galley: &Galley, pad: f32) -> Option<Pixmap> {
        let size = galley.size() * self.scale;
        let width = (size.x + 2.0 * pad).ceil() as u32;
        let height = (size.y + 2.0 * pad).ceil() as u32;
        let mut pixmap = Pixmap::new(width, height)?;

        let atlas = self.fonts.image();
        let [atlas_width, _] = atlas.size;
        let pixels = pixmap.pixels_mut();

        for row in &galley.rows {
            for glyph in &row.glyphs {
                let uv = glyph.uv_rect;
                if uv.is_nothing() {
                    continue;
                }
                let color = galley
                    .job
                    .sections
                    .get(glyph.section_index as usize)
                    .map_or(Color32::BLACK, |section| section.format.color);
                let [r, g, b, a] = color.to_srgba_unmultiplied();

                let origin = (glyph.pos.to_vec2() + uv.offset) * self.scale;
                let left = (origin.x + pad).round() as i64;
                let top = (origin.y + pad).round() as i64;

                for ty in uv.min[1]..uv.max[1] {
                    for tx in uv.min[0]..uv.max[0] {
                        let coverage = atlas.pixels[ty as usize * atlas_width + tx as usize];
                        let x = left + (tx - uv.min[0]) as i64;
                        let y = top + (ty - uv.min[1]) as i64;
                        if coverage <= 0.0 || x < 0 || y < 0 {
                            continue;
                        }
                        let (x, y) = (x as u32, y as u32);
                        if x >= width || y >= height {
                            continue;
                        }
                        let alpha = (a as f32 * coverage.min(1.0)).round() as u8;
                        let target = &mut pixels[(y * width + x) as usize];
                        if alpha > target.alpha() {
                            *target = ColorU8::from_rgba(r, g, b, alpha).premultiply();
                        }
                    }
                }
            }
        }
        Some(pixmap)
    }
}

fn pixel_size(width: u32, height: u32, scale: f32) -> [u32; 2] {
    [
        (width as f32 * scale).round() as u32,
        (height as f32 * scale).round() as u32,
    ]
}

fn solid(color: Color32) -> Paint<'static> {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f32) -> tiny_skia::Stroke {
    tiny_skia::Stroke {
        width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Default::default()
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    fn polyline(&mut self, points: &[Pos2], style: &StrokeStyle) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut builder = PathBuilder::new();
        builder.move_to(first.x, first.y);
        for point in rest {
            builder.line_to(point.x, point.y);
        }
        let Some(path) = builder.finish() else {
            return;
        };
        let transform = self.transform();
        self.pixmap.stroke_path(
            &path,
            &solid(style.color),
            &round_stroke(style.thickness),
            transform,
            None,
        );
    }

    fn dot(&mut self, center: Pos2, radius: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let transform = self.transform();
            self.pixmap.fill_path(&path, &solid(color), FillRule::Winding, transform, None);
        }
    }

    fn glyph(&mut self, center: Pos2, text: &str, size: f32, rotation: f32, opacity: f32) {
        let font = FontId::proportional(size);
        let galley = self.fonts.layout_no_wrap(text.to_owned(), font, Color32::BLACK);
        let pad = 1.0;
        let Some(glyphs) = self.glyph_pixmap(&galley, pad) else {
            return;
        };

        let half = galley.size() * self.scale / 2.0;
        let anchor = center.to_vec2() * self.scale;
        let transform = Transform::from_translate(-(half.x + pad), -(half.y + pad))
            .post_concat(Transform::from_rotate(rotation))
            .post_concat(Transform::from_translate(anchor.x, anchor.y));
        let paint = PixmapPaint {
            opacity: opacity.clamp(0.0, 1.0),
            quality: FilterQuality::Bilinear,
            ..Default::default()
        };
        self.pixmap.draw_pixmap(0, 0, glyphs.as_ref(), &paint, transform, None);
    }

    fn ring(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            let transform = self.transform();
            self.pixmap.stroke_path(&path, &solid(color), &round_stroke(width), transform, None);
        }
    }
}
