use std::path::PathBuf;

use crate::command::{DisplayCommand, Sticker, Stroke};
use crate::config::SketchpadConfig;
use crate::document::Document;
use crate::error::SketchResult;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::input::InputEvent;
use crate::state::SessionState;
use crate::tools::{Action, CosmeticSource, RandomCosmetics, ToolKind};

/// What an [`Action`] produced, beyond mutating the sketchpad
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Done,
    /// The action had nothing to act on
    Ignored,
    Exported(PathBuf),
}

/// The input controller: routes pointer input and tool actions into the
/// drawing document and the session state.
///
/// `ContentsChanged` is raised by the document; `PointerMoved` is raised here.
pub struct Sketchpad {
    document: Document,
    session: SessionState,
    config: SketchpadConfig,
    pointer_events: EventBus,
}

impl std::fmt::Debug for Sketchpad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sketchpad")
            .field("document", &self.document)
            .field("session", &self.session)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for Sketchpad {
    fn default() -> Self {
        Self::new(SketchpadConfig::default())
    }
}

impl Sketchpad {
    pub fn new(config: SketchpadConfig) -> Self {
        Self::with_cosmetics(config, Box::new(RandomCosmetics))
    }

    pub fn with_cosmetics(config: SketchpadConfig, cosmetics: Box<dyn CosmeticSource>) -> Self {
        let session = SessionState::new(&config, cosmetics);
        Self {
            document: Document::new(),
            session,
            config,
            pointer_events: EventBus::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn subscribe_contents(&mut self, handler: Box<dyn EventHandler>) {
        self.document.subscribe(handler);
    }

    pub fn subscribe_pointer(&mut self, handler: Box<dyn EventHandler>) {
        self.pointer_events.subscribe(handler);
    }

    /// Subscribe one handler to both notifications
    pub fn subscribe_all<H>(&mut self, handler: H)
    where
        H: EventHandler + Clone + 'static,
    {
        self.subscribe_contents(Box::new(handler.clone()));
        self.subscribe_pointer(Box::new(handler));
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { pos } => self.begin_gesture(pos),
            InputEvent::PointerMove { pos } => {
                self.session.set_pointer(Some(pos));
                if let Some(handle) = self.session.gesture() {
                    if let Err(err) = self.document.extend(handle, pos.x, pos.y) {
                        log::error!("Dropping gesture: {err}");
                        self.finish_gesture();
                    }
                } else {
                    self.session.update_preview_at(pos);
                    self.pointer_events.emit(SketchEvent::PointerMoved);
                }
            }
            InputEvent::PointerUp => self.finish_gesture(),
            InputEvent::PointerLeave => {
                self.finish_gesture();
                self.session.set_pointer(None);
                self.session.hide_preview();
                self.pointer_events.emit(SketchEvent::PointerMoved);
            }
        }
    }

    fn begin_gesture(&mut self, pos: egui::Pos2) {
        // a lost pointer-up must not leave the old command extendable
        self.finish_gesture();
        self.session.set_pointer(Some(pos));

        let command: DisplayCommand = match self.session.tool() {
            ToolKind::Marker => Stroke::new(pos, self.session.stroke_style()).into(),
            ToolKind::Sticker => match self.session.sticker_style() {
                Some(style) => Sticker::new(pos, style, self.session.sticker_size()).into(),
                None => {
                    log::debug!("Sticker tool has no glyph; ignoring press");
                    return;
                }
            },
        };

        match self.document.commit_push(command) {
            Ok(handle) => self.session.set_gesture(Some(handle)),
            Err(err) => log::error!("Failed to begin gesture: {err}"),
        }
    }

    fn finish_gesture(&mut self) {
        if self.session.gesture().is_some() {
            self.document.end_gesture();
            self.session.set_gesture(None);
        }
    }

    /// Forget the gesture if the document no longer has it (undo, clear)
    fn reconcile_gesture(&mut self) {
        if self.document.active_gesture().is_none() {
            self.session.set_gesture(None);
        }
    }

    pub fn apply(&mut self, action: Action) -> SketchResult<ActionOutcome> {
        log::info!("Action: {}", action.name());
        let outcome = match action {
            Action::SelectMarker(thickness) => {
                self.session.select_marker(thickness);
                self.pointer_events.emit(SketchEvent::PointerMoved);
                ActionOutcome::Done
            }
            Action::SelectSticker(glyph) => {
                self.session.select_sticker(&glyph);
                self.pointer_events.emit(SketchEvent::PointerMoved);
                ActionOutcome::Done
            }
            Action::AddCustomSticker(glyph) => {
                self.session.add_sticker(&glyph)?;
                self.pointer_events.emit(SketchEvent::PointerMoved);
                ActionOutcome::Done
            }
            Action::Undo => {
                let undone = self.document.undo();
                self.reconcile_gesture();
                if undone { ActionOutcome::Done } else { ActionOutcome::Ignored }
            }
            Action::Redo => {
                if self.document.redo() {
                    ActionOutcome::Done
                } else {
                    ActionOutcome::Ignored
                }
            }
            Action::Clear => {
                self.document.clear();
                self.reconcile_gesture();
                ActionOutcome::Done
            }
            Action::Export => self.export()?,
        };
        Ok(outcome)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn export(&self) -> SketchResult<ActionOutcome> {
        let path = self.config.export_path();
        let options = crate::export::ExportOptions::from(&self.config);
        crate::export::save_png(&self.document, &options, &path)?;
        Ok(ActionOutcome::Exported(path))
    }

    #[cfg(target_arch = "wasm32")]
    fn export(&self) -> SketchResult<ActionOutcome> {
        Err(crate::error::SketchError::Export(
            "saving files is not supported in the browser".to_owned(),
        ))
    }
}
