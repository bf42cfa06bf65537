use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{EventHandler, SketchEvent};

/// Asks egui for a new frame whenever anything visible changed
#[derive(Debug, Clone)]
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, _event: SketchEvent) {
        self.ctx.request_repaint();
    }
}

/// Keeps every event it sees, in order. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<SketchEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SketchEvent> {
        self.events.lock().clone()
    }

    pub fn count(&self, event: SketchEvent) -> usize {
        self.events.lock().iter().filter(|e| **e == event).count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for EventLog {
    fn handle_event(&mut self, event: SketchEvent) {
        self.events.lock().push(event);
    }
}
