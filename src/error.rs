use thiserror::Error;

use crate::command::CommandId;

/// Errors raised by the sketchpad core and its export path
#[derive(Debug, Error)]
pub enum SketchError {
    /// `extend` was called while no gesture is in progress
    #[error("No gesture is in progress")]
    NoActiveGesture,

    /// `extend` was called with a handle that no longer refers to the live gesture
    #[error("Gesture handle {handle} is stale (active: {active:?})")]
    StaleGesture {
        handle: CommandId,
        active: Option<CommandId>,
    },

    /// Previews are transient and cannot be committed to the drawing
    #[error("A preview cannot be committed to the drawing")]
    PreviewNotCommittable,

    /// A custom sticker was submitted with no visible text
    #[error("Sticker glyph must not be empty")]
    EmptyGlyph,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for sketchpad operations
pub type SketchResult<T> = Result<T, SketchError>;
