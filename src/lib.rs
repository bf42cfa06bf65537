#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod event;
pub mod export;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod style;
pub mod surface;
pub mod tools;

pub use app::SketchpadApp;
pub use command::{CommandId, DisplayCommand, Preview, Sticker, Stroke};
pub use config::SketchpadConfig;
pub use document::{Document, GestureHandle};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler};
pub use renderer::Renderer;
pub use sketchpad::{ActionOutcome, Sketchpad};
pub use state::SessionState;
pub use style::{StickerStyle, StrokeStyle};
pub use surface::Surface;
pub use tools::{Action, ToolKind};
