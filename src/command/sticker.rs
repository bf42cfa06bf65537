use egui::Pos2;

use super::CommandId;
use crate::style::StickerStyle;
use crate::surface::Surface;

/// Default glyph size of placed stickers, in surface units
pub const STICKER_SIZE: f32 = 32.0;

/// A rotated glyph placed at a single position
#[derive(Debug)]
pub struct Sticker {
    id: CommandId,
    position: Pos2,
    style: StickerStyle,
    size: f32,
}

impl Sticker {
    pub fn new(position: Pos2, style: StickerStyle, size: f32) -> Self {
        Self {
            id: CommandId::new(),
            position,
            style,
            size,
        }
    }

    pub fn id(&self) -> CommandId {
        self.id
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn style(&self) -> &StickerStyle {
        &self.style
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn reposition(&mut self, x: f32, y: f32) {
        self.position = Pos2::new(x, y);
    }

    pub fn display(&self, surface: &mut dyn Surface) {
        surface.glyph(
            self.position,
            &self.style.glyph,
            self.size,
            self.style.rotation,
            1.0,
        );
    }
}
