use egui::{Color32, Sense, Stroke};

use crate::StickerPadApp;
use crate::surface::PainterSurface;

pub fn central_panel(app: &mut StickerPadApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let side = app.state().config().canvas_size;

        ui.vertical_centered(|ui| {
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), Sense::click_and_drag());
            let canvas_rect = response.rect;

            // The prompt is modal: no drawing behind it.
            if !app.is_sticker_prompt_open() {
                app.handle_canvas_input(ctx, canvas_rect);
            }

            let mut surface = PainterSurface::new(&painter, canvas_rect);
            app.renderer().render_frame(&mut surface, app.state());

            painter.rect_stroke(canvas_rect, 0.0, Stroke::new(1.0, Color32::GRAY));
        });
    });
}
