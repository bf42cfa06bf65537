use egui::{Color32, Pos2};

use super::CommandId;
use crate::surface::Surface;

/// Opacity of the ghost sticker under the pointer
pub const PREVIEW_OPACITY: f32 = 0.6;
/// Outline width of the brush-size ring
pub const PREVIEW_RING_WIDTH: f32 = 2.0;

/// What the active tool would place if the pointer were pressed now.
///
/// Unlike strokes and stickers, the preview is re-synchronized with the
/// tool whenever it changes: a glyph shows a translucent sticker, no glyph
/// shows a ring the size of the brush.
#[derive(Debug)]
pub struct Preview {
    id: CommandId,
    position: Pos2,
    /// Brush thickness; the ring's diameter
    size: f32,
    glyph: Option<String>,
    rotation: f32,
    color: Color32,
    glyph_size: f32,
    opacity: f32,
}

impl Preview {
    pub fn new(position: Pos2, size: f32, glyph: Option<String>) -> Self {
        Self {
            id: CommandId::new(),
            position,
            size,
            glyph,
            rotation: 0.0,
            color: Color32::BLACK,
            glyph_size: super::STICKER_SIZE,
            opacity: PREVIEW_OPACITY,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn reposition(&mut self, x: f32, y: f32) {
        self.position = Pos2::new(x, y);
    }

    pub fn set_glyph(&mut self, glyph: Option<String>) {
        self.glyph = glyph;
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// Cosmetics the preview copies from the tool so `display` never reads tool state
    pub fn set_appearance(&mut self, rotation: f32, color: Color32) {
        self.rotation = rotation;
        self.color = color;
    }

    pub fn set_glyph_style(&mut self, glyph_size: f32, opacity: f32) {
        self.glyph_size = glyph_size;
        self.opacity = opacity;
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        match &self.glyph {
            Some(glyph) => surface.glyph(
                self.position,
                glyph,
                self.glyph_size,
                self.rotation,
                self.opacity,
            ),
            None => surface.ring(
                self.position,
                self.size / 2.0,
                PREVIEW_RING_WIDTH,
                self.color,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use egui::pos2;

    #[test]
    fn test_preview_switches_form_with_glyph() {
        let mut preview = Preview::new(pos2(10.0, 10.0), 10.0, None);
        preview.set_appearance(90.0, Color32::GREEN);

        let mut surface = RecordingSurface::new();
        preview.display(&mut surface);
        preview.set_glyph(Some("★".to_owned()));
        preview.reposition(20.0, 30.0);
        preview.display(&mut surface);

        assert_eq!(
            surface.ops(),
            &[
                SurfaceOp::Ring {
                    center: pos2(10.0, 10.0),
                    radius: 5.0,
                    width: PREVIEW_RING_WIDTH,
                    color: Color32::GREEN,
                },
                SurfaceOp::Glyph {
                    center: pos2(20.0, 30.0),
                    text: "★".to_owned(),
                    size: crate::command::STICKER_SIZE,
                    rotation: 90.0,
                    opacity: PREVIEW_OPACITY,
                },
            ]
        );
    }
}
