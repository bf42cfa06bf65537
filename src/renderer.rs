use egui::{Color32, Painter, Rect};

use crate::document::Document;
use crate::state::SessionState;
use crate::surface::{PainterSurface, Surface};

/// The render loop: clear, replay the drawing, then the preview when idle.
///
/// Rendering only reads the document and session.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    frames_rendered: u64,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl Renderer {
    pub fn new(background: Color32) -> Self {
        Self {
            background,
            frames_rendered: 0,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Draw a full frame onto any surface
    pub fn render(
        &mut self,
        surface: &mut dyn Surface,
        document: &Document,
        session: &SessionState,
    ) {
        surface.clear();
        document.replay(surface);
        // a live gesture hides the preview so it never overlaps the command being placed
        if !session.is_drawing() {
            if let Some(preview) = session.preview() {
                preview.display(surface);
            }
        }
        self.frames_rendered += 1;
    }

    /// Draw a full frame onto the canvas area of the UI
    pub fn paint(
        &mut self,
        painter: &Painter,
        rect: Rect,
        document: &Document,
        session: &SessionState,
    ) {
        let mut surface = PainterSurface::new(painter, rect, self.background);
        self.render(&mut surface, document, session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchpadConfig;
    use crate::input::InputEvent;
    use crate::sketchpad::Sketchpad;
    use crate::surface::{RecordingSurface, SurfaceOp};
    use crate::tools::FixedCosmetics;
    use egui::pos2;

    fn sketchpad() -> Sketchpad {
        Sketchpad::with_cosmetics(SketchpadConfig::default(), Box::new(FixedCosmetics::default()))
    }

    #[test]
    fn test_render_basics() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        let pad = sketchpad();
        let mut renderer = Renderer::default();
        renderer.paint(&painter, rect, pad.document(), pad.session());
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn test_frame_starts_with_clear_and_ends_with_preview() {
        let mut pad = sketchpad();
        pad.handle_input(InputEvent::PointerDown { pos: pos2(1.0, 1.0) });
        pad.handle_input(InputEvent::PointerUp);
        pad.handle_input(InputEvent::PointerMove { pos: pos2(9.0, 9.0) });

        let mut surface = RecordingSurface::new();
        Renderer::default().render(&mut surface, pad.document(), pad.session());
        let ops = surface.ops();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0], SurfaceOp::Clear);
        assert!(matches!(ops[1], SurfaceOp::Dot { .. }));
        assert!(matches!(ops[2], SurfaceOp::Ring { center, .. } if center == pos2(9.0, 9.0)));
    }

    #[test]
    fn test_preview_hidden_while_drawing() {
        let mut pad = sketchpad();
        pad.handle_input(InputEvent::PointerMove { pos: pos2(1.0, 1.0) });
        pad.handle_input(InputEvent::PointerDown { pos: pos2(1.0, 1.0) });
        pad.handle_input(InputEvent::PointerMove { pos: pos2(5.0, 1.0) });

        let mut surface = RecordingSurface::new();
        let mut renderer = Renderer::default();
        renderer.render(&mut surface, pad.document(), pad.session());
        renderer.render(&mut surface, pad.document(), pad.session());
        assert!(
            !surface
                .visible_ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::Ring { .. } | SurfaceOp::Glyph { .. }))
        );
        // idempotent: both frames drew the same thing
        let ops = surface.ops();
        assert_eq!(ops[..ops.len() / 2], ops[ops.len() / 2..]);
    }
}
