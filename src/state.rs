use egui::{Color32, Pos2};

use crate::command::Preview;
use crate::config::SketchpadConfig;
use crate::document::GestureHandle;
use crate::error::{SketchError, SketchResult};
use crate::style::{StickerStyle, StrokeStyle, normalize_degrees};
use crate::tools::{CosmeticSource, ToolKind};

/// Tool selection, sticker library and pointer state for one sketching session.
///
/// Created at session start with the thin marker selected and only mutated
/// through the named operations below.
pub struct SessionState {
    tool: ToolKind,
    thickness: f32,
    color: Color32,
    sticker_glyph: Option<String>,
    rotation: f32,
    /// The command the current gesture is extending, if a gesture is in progress
    gesture: Option<GestureHandle>,
    stickers: Vec<String>,
    preview: Option<Preview>,
    pointer: Option<Pos2>,
    cosmetics: Box<dyn CosmeticSource>,
    randomize_cosmetics: bool,
    sticker_size: f32,
    preview_opacity: f32,
}

impl std::fmt::Debug for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionState")
            .field("tool", &self.tool)
            .field("thickness", &self.thickness)
            .field("color", &self.color)
            .field("sticker_glyph", &self.sticker_glyph)
            .field("rotation", &self.rotation)
            .field("gesture", &self.gesture)
            .field("stickers", &self.stickers)
            .field("preview", &self.preview)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl SessionState {
    pub fn new(config: &SketchpadConfig, mut cosmetics: Box<dyn CosmeticSource>) -> Self {
        let color = cosmetics.stroke_color();
        let rotation = normalize_degrees(cosmetics.sticker_rotation());
        Self {
            tool: ToolKind::Marker,
            thickness: config.thin_thickness,
            color,
            sticker_glyph: None,
            rotation,
            gesture: None,
            stickers: config.default_stickers.clone(),
            preview: None,
            pointer: None,
            cosmetics,
            randomize_cosmetics: config.randomize_cosmetics,
            sticker_size: config.sticker_size,
            preview_opacity: config.preview_opacity,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn sticker_glyph(&self) -> Option<&str> {
        self.sticker_glyph.as_deref()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn pointer(&self) -> Option<Pos2> {
        self.pointer
    }

    pub fn is_drawing(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn gesture(&self) -> Option<GestureHandle> {
        self.gesture
    }

    pub(crate) fn set_gesture(&mut self, gesture: Option<GestureHandle>) {
        self.gesture = gesture;
    }

    pub(crate) fn set_pointer(&mut self, pointer: Option<Pos2>) {
        self.pointer = pointer;
    }

    /// Style a stroke begun right now would capture
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle::new(self.thickness, self.color)
    }

    /// Style a sticker placed right now would capture; `None` without a glyph
    pub fn sticker_style(&self) -> Option<StickerStyle> {
        self.sticker_glyph
            .as_ref()
            .map(|glyph| StickerStyle::new(glyph.clone(), self.rotation))
    }

    pub fn select_marker(&mut self, thickness: f32) {
        self.tool = ToolKind::Marker;
        self.thickness = StrokeStyle::new(thickness, self.color).thickness;
        self.sticker_glyph = None;
        if self.randomize_cosmetics {
            self.color = self.cosmetics.stroke_color();
        }
        log::info!("Selected marker ({:.1}px)", self.thickness);
        self.sync_preview();
    }

    /// Selecting a blank glyph leaves the sticker tool active with nothing to place
    pub fn select_sticker(&mut self, glyph: &str) {
        self.tool = ToolKind::Sticker;
        let glyph = glyph.trim();
        if glyph.is_empty() {
            log::warn!("Sticker tool selected without a glyph");
            self.sticker_glyph = None;
        } else {
            self.sticker_glyph = Some(glyph.to_owned());
        }
        if self.randomize_cosmetics {
            self.rerandomize_rotation();
        }
        log::info!("Selected sticker {:?}", self.sticker_glyph);
        self.sync_preview();
    }

    /// Append a glyph to the sticker library. Duplicates are allowed.
    ///
    /// The new sticker is not selected. With the sticker tool active the
    /// preview rotation is re-rolled.
    pub fn add_sticker(&mut self, glyph: &str) -> SketchResult<()> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        self.stickers.push(glyph.to_owned());
        log::info!("Added custom sticker {glyph:?} ({} total)", self.stickers.len());
        if self.randomize_cosmetics && self.tool == ToolKind::Sticker {
            self.rerandomize_rotation();
        }
        self.sync_preview();
        Ok(())
    }

    fn rerandomize_rotation(&mut self) {
        self.rotation = normalize_degrees(self.cosmetics.sticker_rotation());
    }

    /// Move the preview to `pos`, creating it on first use
    pub fn update_preview_at(&mut self, pos: Pos2) {
        self.pointer = Some(pos);
        match &mut self.preview {
            Some(preview) => preview.reposition(pos.x, pos.y),
            None => {
                self.preview = Some(Preview::new(
                    pos,
                    self.thickness,
                    self.sticker_glyph.clone(),
                ));
            }
        }
        self.sync_preview();
    }

    pub fn hide_preview(&mut self) {
        self.preview = None;
    }

    /// Copy the active tool's parameters into the preview, if there is one
    fn sync_preview(&mut self) {
        if let Some(preview) = &mut self.preview {
            preview.set_size(self.thickness);
            preview.set_glyph(self.sticker_glyph.clone());
            preview.set_appearance(self.rotation, self.color);
            preview.set_glyph_style(self.sticker_size, self.preview_opacity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::FixedCosmetics;
    use egui::pos2;

    fn session(randomize: bool) -> SessionState {
        let config = SketchpadConfig {
            randomize_cosmetics: randomize,
            ..SketchpadConfig::default()
        };
        SessionState::new(
            &config,
            Box::new(FixedCosmetics {
                color: Color32::RED,
                rotation: 30.0,
            }),
        )
    }

    #[test]
    fn test_starts_with_thin_marker() {
        let state = session(true);
        assert_eq!(state.tool(), ToolKind::Marker);
        assert_eq!(state.thickness(), 3.0);
        assert_eq!(state.sticker_glyph(), None);
        assert_eq!(state.stickers(), ["💾", "🎮", "🧠"]);
        assert!(!state.is_drawing());
        assert!(state.preview().is_none());
    }

    #[test]
    fn test_preview_is_created_lazily_and_follows_tool() {
        let mut state = session(true);
        state.update_preview_at(pos2(5.0, 6.0));
        let preview = state.preview().unwrap();
        assert_eq!(preview.glyph(), None);
        assert_eq!(preview.size(), 3.0);
        assert_eq!(preview.color(), Color32::RED);

        state.select_sticker("🎮");
        let preview = state.preview().unwrap();
        assert_eq!(preview.glyph(), Some("🎮"));
        assert_eq!(preview.rotation(), 30.0);
        assert_eq!(preview.position(), pos2(5.0, 6.0));

        state.select_marker(10.0);
        assert_eq!(state.preview().unwrap().glyph(), None);
        assert_eq!(state.preview().unwrap().size(), 10.0);
    }

    #[test]
    fn test_add_sticker_allows_duplicates_and_rejects_blank() {
        let mut state = session(true);
        state.add_sticker("💾").unwrap();
        state.add_sticker(" ✨ ").unwrap();
        assert_eq!(state.stickers(), ["💾", "🎮", "🧠", "💾", "✨"]);
        assert!(matches!(state.add_sticker("   "), Err(SketchError::EmptyGlyph)));
        assert_eq!(state.stickers().len(), 5);
        // adding does not select
        assert_eq!(state.tool(), ToolKind::Marker);
    }

    #[test]
    fn test_blank_sticker_selection_has_no_glyph() {
        let mut state = session(true);
        state.select_sticker("  ");
        assert_eq!(state.tool(), ToolKind::Sticker);
        assert!(state.sticker_style().is_none());
    }

    #[test]
    fn test_cosmetics_only_rerolled_when_enabled() {
        struct Counting(u8);
        impl CosmeticSource for Counting {
            fn stroke_color(&mut self) -> Color32 {
                self.0 += 1;
                Color32::from_gray(self.0)
            }
            fn sticker_rotation(&mut self) -> f32 {
                self.0 += 1;
                self.0 as f32
            }
        }

        let config = SketchpadConfig {
            randomize_cosmetics: false,
            ..SketchpadConfig::default()
        };
        let mut fixed = SessionState::new(&config, Box::new(Counting(0)));
        let color = fixed.color();
        fixed.select_marker(10.0);
        assert_eq!(fixed.color(), color);

        let mut rolling = SessionState::new(&SketchpadConfig::default(), Box::new(Counting(0)));
        let color = rolling.color();
        rolling.select_marker(10.0);
        assert_ne!(rolling.color(), color);
    }
}
