use egui::{Context, PointerButton, Pos2, Rect, Response};

/// Pointer input in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas (with or without the button held)
    PointerMove { pos: Pos2 },
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
}

/// What the pointer did during one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub hover_pos: Option<Pos2>,
    /// The canvas widget is the topmost thing under the pointer
    pub canvas_hovered: bool,
    pub pressed: bool,
    pub released: bool,
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    /// Last position seen over the canvas, surface-local
    last_pos: Option<Pos2>,
    button_down: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pos: None,
            button_down: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read this frame's primary-button pointer state from egui.
    ///
    /// `canvas` is the canvas widget's response; presses it does not hover
    /// (e.g. on a window above it) never start a gesture.
    pub fn process_input(&mut self, ctx: &Context, canvas: &Response) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            hover_pos: input.pointer.hover_pos(),
            canvas_hovered: canvas.hovered(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.translate(sample)
    }

    /// Turn one frame's pointer sample into canvas events
    pub fn translate(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let over_canvas = sample
            .hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| self.to_local(pos));

        let Some(pos) = over_canvas else {
            if self.last_pos.take().is_some() {
                self.button_down = false;
                events.push(InputEvent::PointerLeave);
            }
            return events;
        };

        if sample.pressed && sample.canvas_hovered {
            self.button_down = true;
            events.push(InputEvent::PointerDown { pos });
        } else if self.last_pos != Some(pos) {
            events.push(InputEvent::PointerMove { pos });
        }

        if sample.released && self.button_down {
            self.button_down = false;
            events.push(InputEvent::PointerUp);
        }

        self.last_pos = Some(pos);
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), vec2(256.0, 256.0)))
    }

    fn at(x: f32, y: f32) -> PointerSample {
        PointerSample {
            hover_pos: Some(pos2(x, y)),
            canvas_hovered: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_positions_are_surface_local() {
        let mut input = handler();
        assert_eq!(
            input.translate(at(110.0, 60.0)),
            [InputEvent::PointerMove { pos: pos2(10.0, 10.0) }]
        );
    }

    #[test]
    fn test_unchanged_position_emits_nothing() {
        let mut input = handler();
        input.translate(at(110.0, 60.0));
        assert!(input.translate(at(110.0, 60.0)).is_empty());
    }

    #[test]
    fn test_press_drag_release() {
        let mut input = handler();
        let down = input.translate(PointerSample {
            pressed: true,
            ..at(110.0, 60.0)
        });
        assert_eq!(down, [InputEvent::PointerDown { pos: pos2(10.0, 10.0) }]);

        let drag = input.translate(at(120.0, 60.0));
        assert_eq!(drag, [InputEvent::PointerMove { pos: pos2(20.0, 10.0) }]);

        let up = input.translate(PointerSample {
            released: true,
            ..at(120.0, 60.0)
        });
        assert_eq!(up, [InputEvent::PointerUp]);
    }

    #[test]
    fn test_leaving_canvas_emits_leave_once() {
        let mut input = handler();
        input.translate(at(110.0, 60.0));
        assert_eq!(input.translate(at(10.0, 10.0)), [InputEvent::PointerLeave]);
        assert!(input.translate(at(10.0, 10.0)).is_empty());
        assert!(input.translate(PointerSample::default()).is_empty());
    }

    #[test]
    fn test_press_outside_canvas_is_ignored() {
        let mut input = handler();
        let events = input.translate(PointerSample {
            pressed: true,
            ..at(0.0, 0.0)
        });
        assert!(events.is_empty());
    }

    #[test]
    fn test_press_on_window_above_canvas_is_ignored() {
        let mut input = handler();
        let events = input.translate(PointerSample {
            pressed: true,
            canvas_hovered: false,
            ..at(110.0, 60.0)
        });
        assert_eq!(events, [InputEvent::PointerMove { pos: pos2(10.0, 10.0) }]);

        let release = input.translate(PointerSample {
            released: true,
            canvas_hovered: false,
            ..at(110.0, 60.0)
        });
        assert!(release.is_empty());
    }
}
