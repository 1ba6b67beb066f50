use egui::{Align2, Key};

use crate::StickerPadApp;

/// Modal asking for a custom sticker. Cancel, or OK on blank text, adds nothing.
pub fn sticker_prompt(app: &mut StickerPadApp, ctx: &egui::Context) {
    let Some(text) = app.sticker_prompt_mut() else {
        return;
    };

    // Some(answer) once the user decides; answer None is a cancel.
    let mut decision: Option<Option<String>> = None;

    egui::Window::new("Custom sticker")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Type an emoji or short text:");
            ui.text_edit_singleline(text);
            let submitted = ui.input(|i| i.key_pressed(Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("OK").clicked() || submitted {
                    decision = Some(Some(text.clone()));
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(Key::Escape)) {
                    decision = Some(None);
                }
            });
        });

    if let Some(answer) = decision {
        app.close_sticker_prompt(answer.as_deref());
    }
}
