use egui::Pos2;

use crate::command::{CommandId, DisplayCommand, STICKER_SIZE, Sticker, Stroke};
use crate::error::{SketchError, SketchResult};
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::style::{StickerStyle, StrokeStyle};
use crate::surface::Surface;

/// Non-owning reference to the command a gesture is currently extending.
///
/// Only valid between `begin_*`/`commit_push` and the next `end_gesture`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureHandle {
    id: CommandId,
}

impl GestureHandle {
    pub fn id(&self) -> CommandId {
        self.id
    }
}

/// The drawing: committed commands in z-order plus the redo buffer.
///
/// Commands are moved between the two lists and never cloned. Any new
/// commit invalidates the redo buffer. `clear` empties both and is not
/// undoable.
#[derive(Debug, Default)]
pub struct Document {
    committed: Vec<DisplayCommand>,
    /// Top of the stack is the last element
    redo_buffer: Vec<DisplayCommand>,
    active: Option<CommandId>,
    events: EventBus,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to `ContentsChanged` notifications
    pub fn subscribe(&mut self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn committed(&self) -> &[DisplayCommand] {
        &self.committed
    }

    /// Most recently undone command last
    pub fn redo_buffer(&self) -> &[DisplayCommand] {
        &self.redo_buffer
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    pub fn active_gesture(&self) -> Option<GestureHandle> {
        self.active.map(|id| GestureHandle { id })
    }

    pub fn begin_stroke(&mut self, x: f32, y: f32, style: StrokeStyle) -> GestureHandle {
        self.push_new(Stroke::new(Pos2::new(x, y), style).into())
    }

    /// Fails with `EmptyGlyph`, leaving the drawing and redo buffer untouched,
    /// when `glyph` is blank
    pub fn begin_sticker(
        &mut self,
        x: f32,
        y: f32,
        glyph: &str,
        rotation: f32,
    ) -> SketchResult<GestureHandle> {
        let style = StickerStyle::new(glyph, rotation);
        self.commit_push(Sticker::new(Pos2::new(x, y), style, STICKER_SIZE).into())
    }

    /// Commit a freshly created stroke or sticker and start a gesture on it
    pub fn commit_push(&mut self, command: DisplayCommand) -> SketchResult<GestureHandle> {
        if command.is_preview() {
            return Err(SketchError::PreviewNotCommittable);
        }
        if let Some(sticker) = command.as_sticker() {
            if sticker.style().glyph.trim().is_empty() {
                return Err(SketchError::EmptyGlyph);
            }
        }
        Ok(self.push_new(command))
    }

    fn push_new(&mut self, command: DisplayCommand) -> GestureHandle {
        let id = command.id();
        log::debug!("Begin {} {}", command.kind_name(), id);
        self.committed.push(command);
        self.redo_buffer.clear();
        self.active = Some(id);
        self.events.emit(SketchEvent::ContentsChanged);
        GestureHandle { id }
    }

    /// Feed a pointer position to the command `handle` refers to
    pub fn extend(&mut self, handle: GestureHandle, x: f32, y: f32) -> SketchResult<()> {
        let Some(active) = self.active else {
            return Err(SketchError::NoActiveGesture);
        };
        let stale = SketchError::StaleGesture {
            handle: handle.id,
            active: Some(active),
        };
        if active != handle.id {
            return Err(stale);
        }
        match self.committed.last_mut() {
            Some(command) if command.id() == handle.id => command.drag(Pos2::new(x, y)),
            _ => return Err(stale),
        }
        self.events.emit(SketchEvent::ContentsChanged);
        Ok(())
    }

    /// Release the active gesture handle, if any
    pub fn end_gesture(&mut self) -> Option<GestureHandle> {
        let ended = self.active.take().map(|id| GestureHandle { id });
        if let Some(handle) = ended {
            log::debug!("End gesture {}", handle.id);
        }
        ended
    }

    /// Move the newest committed command onto the redo buffer.
    ///
    /// Returns `false` (and does nothing) when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.committed.pop() else {
            return false;
        };
        if self.active == Some(command.id()) {
            self.active = None;
        }
        log::info!("Undo {} {}", command.kind_name(), command.id());
        self.redo_buffer.push(command);
        self.events.emit(SketchEvent::ContentsChanged);
        true
    }

    /// Move the most recently undone command back onto the drawing
    pub fn redo(&mut self) -> bool {
        let Some(command) = self.redo_buffer.pop() else {
            return false;
        };
        log::info!("Redo {} {}", command.kind_name(), command.id());
        self.committed.push(command);
        self.events.emit(SketchEvent::ContentsChanged);
        true
    }

    /// Drop everything. Cleared commands do not go to the redo buffer.
    pub fn clear(&mut self) {
        log::info!(
            "Clear {} committed, {} redoable",
            self.committed.len(),
            self.redo_buffer.len()
        );
        self.committed.clear();
        self.redo_buffer.clear();
        self.active = None;
        self.events.emit(SketchEvent::ContentsChanged);
    }

    /// Display every committed command in order
    pub fn replay(&self, surface: &mut dyn Surface) {
        for command in &self.committed {
            command.display(surface);
        }
    }

    pub fn committed_ids(&self) -> Vec<CommandId> {
        self.committed.iter().map(DisplayCommand::id).collect()
    }

    pub fn redo_ids(&self) -> Vec<CommandId> {
        self.redo_buffer.iter().map(DisplayCommand::id).collect()
    }
}
