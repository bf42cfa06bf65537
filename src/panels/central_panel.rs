use crate::app::SketchpadApp;

pub fn central_panel(app: &mut SketchpadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = app.sketchpad().config().canvas_size as f32;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::drag());
        let canvas_rect = response.rect;

        app.handle_canvas_input(ctx, &response);
        app.paint_canvas(&painter, canvas_rect);

        painter.rect_stroke(
            canvas_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
        );
    });
}
