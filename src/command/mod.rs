//! Display commands: the things a drawing is made of.
//!
//! Each command renders itself from its own captured state only, so
//! replaying the same list always produces the same picture.

mod preview;
mod sticker;
mod stroke;

use std::fmt;

use egui::Pos2;
use uuid::Uuid;

use crate::surface::Surface;

pub use preview::{PREVIEW_OPACITY, PREVIEW_RING_WIDTH, Preview};
pub use sticker::{STICKER_SIZE, Sticker};
pub use stroke::Stroke;

/// Identity of a display command.
///
/// Allocated once when the command is created. Commands are moved between
/// the committed list and the redo buffer, never cloned, so an id always
/// names exactly one command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandId(Uuid);

impl CommandId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Closed set of things that can be drawn on the canvas
#[derive(Debug)]
pub enum DisplayCommand {
    Stroke(Stroke),
    Sticker(Sticker),
    /// Never enters the committed list
    Preview(Preview),
}

impl DisplayCommand {
    pub fn id(&self) -> CommandId {
        match self {
            Self::Stroke(stroke) => stroke.id(),
            Self::Sticker(sticker) => sticker.id(),
            Self::Preview(preview) => preview.id(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Stroke(_) => "stroke",
            Self::Sticker(_) => "sticker",
            Self::Preview(_) => "preview",
        }
    }

    /// Render onto `surface` using only this command's own state
    pub fn display(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(stroke) => stroke.display(surface),
            Self::Sticker(sticker) => sticker.display(surface),
            Self::Preview(preview) => preview.display(surface),
        }
    }

    /// Gesture mutator: strokes grow, stickers and previews move
    pub fn drag(&mut self, pos: Pos2) {
        match self {
            Self::Stroke(stroke) => stroke.extend(pos.x, pos.y),
            Self::Sticker(sticker) => sticker.reposition(pos.x, pos.y),
            Self::Preview(preview) => preview.reposition(pos.x, pos.y),
        }
    }

    pub fn is_preview(&self) -> bool {
        matches!(self, Self::Preview(_))
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Self::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for DisplayCommand {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Sticker> for DisplayCommand {
    fn from(sticker: Sticker) -> Self {
        Self::Sticker(sticker)
    }
}

impl From<Preview> for DisplayCommand {
    fn from(preview: Preview) -> Self {
        Self::Preview(preview)
    }
}
