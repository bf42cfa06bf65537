use crate::config::SketchpadConfig;
use crate::event::RepaintHandler;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::sketchpad::{ActionOutcome, Sketchpad};
use crate::tools::Action;

/// Storage key for the persisted settings. The drawing itself is never persisted.
const CONFIG_KEY: &str = "sticker_sketchpad_config";

pub struct SketchpadApp {
    sketchpad: Sketchpad,
    renderer: Renderer,
    input: Option<InputHandler>,
    /// Text of the custom sticker dialog while it is open
    custom_sticker: Option<String>,
    status: Option<String>,
}

impl Default for SketchpadApp {
    fn default() -> Self {
        Self::with_config(SketchpadConfig::default())
    }
}

impl SketchpadApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<SketchpadConfig>(storage, CONFIG_KEY))
            .and_then(|mut config| match config.validate_and_clamp() {
                Ok(()) => Some(config),
                Err(err) => {
                    log::warn!("Ignoring stored settings: {err}");
                    None
                }
            })
            .unwrap_or_default();

        let mut app = Self::with_config(config);
        app.sketchpad
            .subscribe_all(RepaintHandler::new(cc.egui_ctx.clone()));
        app
    }

    pub fn with_config(config: SketchpadConfig) -> Self {
        Self {
            sketchpad: Sketchpad::new(config),
            renderer: Renderer::default(),
            input: None,
            custom_sticker: None,
            status: None,
        }
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Run an action, reporting failures in the status line
    pub fn dispatch(&mut self, action: Action) {
        match self.sketchpad.apply(action) {
            Ok(ActionOutcome::Exported(path)) => {
                self.status = Some(format!("Saved {}", path.display()));
            }
            Ok(_) => {}
            Err(err) => {
                log::error!("{err}");
                self.status = Some(err.to_string());
            }
        }
    }

    pub fn open_custom_sticker_dialog(&mut self) {
        self.custom_sticker = Some("✨".to_owned());
    }

    pub fn handle_canvas_input(&mut self, ctx: &egui::Context, canvas: &egui::Response) {
        let input = self
            .input
            .get_or_insert_with(|| InputHandler::new(canvas.rect));
        input.set_canvas_rect(canvas.rect);
        for event in input.process_input(ctx, canvas) {
            self.sketchpad.handle_input(event);
        }
    }

    pub fn paint_canvas(&mut self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        self.renderer.paint(
            painter,
            canvas_rect,
            self.sketchpad.document(),
            self.sketchpad.session(),
        );
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let undo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Z);
        let redo = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Y);
        if ctx.input_mut(|i| i.consume_shortcut(&undo)) {
            self.dispatch(Action::Undo);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&redo)) {
            self.dispatch(Action::Redo);
        }
    }

    fn custom_sticker_dialog(&mut self, ctx: &egui::Context) {
        let Some(text) = self.custom_sticker.as_mut() else {
            return;
        };

        let mut submitted = false;
        let mut cancelled = false;
        egui::Window::new("Add custom sticker")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Enter a custom sticker");
                let response = ui.text_edit_singleline(text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submitted = true;
                }
                ui.horizontal(|ui| {
                    submitted |= ui.button("Add").clicked();
                    cancelled |= ui.button("Cancel").clicked();
                });
            });

        if submitted {
            if let Some(glyph) = self.custom_sticker.take() {
                self.dispatch(Action::AddCustomSticker(glyph));
            }
        } else if cancelled {
            self.custom_sticker = None;
        }
    }
}

impl eframe::App for SketchpadApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_KEY, self.sketchpad.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
        self.custom_sticker_dialog(ctx);
    }
}
