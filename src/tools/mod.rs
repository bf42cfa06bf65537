use serde::{Deserialize, Serialize};

mod cosmetics;
pub use cosmetics::{CosmeticSource, FixedCosmetics, RandomCosmetics, hsl_color};

/// The kinds of tool the sketchpad offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToolKind {
    /// Freehand marker; the thickness lives in the session state
    #[default]
    Marker,
    /// Places the currently selected sticker glyph
    Sticker,
}

impl ToolKind {
    pub fn name(&self) -> &'static str {
        match self {
            ToolKind::Marker => "Marker",
            ToolKind::Sticker => "Sticker",
        }
    }
}

/// UI-level commands the sketchpad accepts besides pointer input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectMarker(f32),
    SelectSticker(String),
    AddCustomSticker(String),
    Undo,
    Redo,
    Clear,
    Export,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SelectMarker(_) => "select-marker",
            Action::SelectSticker(_) => "select-sticker",
            Action::AddCustomSticker(_) => "add-custom-sticker",
            Action::Undo => "undo",
            Action::Redo => "redo",
            Action::Clear => "clear",
            Action::Export => "export",
        }
    }
}
