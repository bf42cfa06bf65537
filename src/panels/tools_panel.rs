use crate::app::SketchpadApp;
use crate::components::ToolButton;
use crate::tools::{Action, ToolKind};

pub fn tools_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Sticker Sketchpad");
            ui.separator();

            let session = app.sketchpad().session();
            let tool = session.tool();
            let thickness = session.thickness();
            let glyph = session.sticker_glyph().map(str::to_owned);
            let stickers = session.stickers().to_vec();
            let thin = app.sketchpad().config().thin_thickness;
            let thick = app.sketchpad().config().thick_thickness;

            ui.label("Markers");
            ui.horizontal(|ui| {
                let fine = ToolButton::new("✏", tool == ToolKind::Marker && thickness == thin)
                    .with_tooltip("Fine Brush");
                if fine.show(ui).clicked() {
                    app.dispatch(Action::SelectMarker(thin));
                }
                let bold = ToolButton::new("🖌", tool == ToolKind::Marker && thickness == thick)
                    .with_tooltip("Bold Brush");
                if bold.show(ui).clicked() {
                    app.dispatch(Action::SelectMarker(thick));
                }
            });

            ui.separator();
            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                for sticker in &stickers {
                    let selected = tool == ToolKind::Sticker && glyph.as_ref() == Some(sticker);
                    if ToolButton::new(sticker, selected).show(ui).clicked() {
                        app.dispatch(Action::SelectSticker(sticker.clone()));
                    }
                }
                let add = ToolButton::new("+", false).with_tooltip("Add custom sticker");
                if add.show(ui).clicked() {
                    app.open_custom_sticker_dialog();
                }
            });

            ui.separator();
            ui.horizontal(|ui| {
                let document = app.sketchpad().document();
                let (can_undo, can_redo) = (document.can_undo(), document.can_redo());
                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.dispatch(Action::Undo);
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.dispatch(Action::Redo);
                }
                if ui.button("Clear").clicked() {
                    app.dispatch(Action::Clear);
                }
            });
            if ui.button("Export").clicked() {
                app.dispatch(Action::Export);
            }

            ui.separator();
            let document = app.sketchpad().document();
            ui.horizontal(|ui| {
                ui.label(format!("Drawing: {}", document.len()));
                ui.label(format!("Redo: {}", document.redo_buffer().len()));
            });
            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
}
