use egui::{Color32, Slider};

use crate::StickerPadApp;
use crate::components::ToolButton;
use crate::tools::{ThicknessPreset, ToolMode};

pub fn tools_panel(app: &mut StickerPadApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let mode = app.state().tools().mode();
            ui.horizontal(|ui| {
                if ui.selectable_label(mode == ToolMode::Marker, "🖊 Marker").clicked() {
                    app.state_mut().set_mode(ToolMode::Marker);
                }
                if ui.selectable_label(mode == ToolMode::Sticker, "⭐ Sticker").clicked() {
                    app.state_mut().set_mode(ToolMode::Sticker);
                }
            });
            ui.separator();

            // Marker settings
            let preset = app.state().tools().thickness_preset();
            ui.horizontal(|ui| {
                ui.label("Thickness:");
                if ui
                    .selectable_label(preset == Some(ThicknessPreset::Thin), "Thin")
                    .clicked()
                {
                    app.state_mut().select_thickness(ThicknessPreset::Thin);
                    app.state_mut().set_mode(ToolMode::Marker);
                }
                if ui
                    .selectable_label(preset == Some(ThicknessPreset::Thick), "Thick")
                    .clicked()
                {
                    app.state_mut().select_thickness(ThicknessPreset::Thick);
                    app.state_mut().set_mode(ToolMode::Marker);
                }
            });

            ui.horizontal(|ui| {
                ui.label("Color:");
                let mut color: Color32 = app.state().tools().color();
                if egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed()
                {
                    app.state_mut().set_color(color);
                }
            });
            ui.separator();

            // Sticker settings
            ui.label("Stickers:");
            let selected = (mode == ToolMode::Sticker).then(|| app.state().tools().sticker().to_owned());
            let stickers = app.state().tools().stickers().to_vec();
            ui.horizontal_wrapped(|ui| {
                for (index, glyph) in stickers.iter().enumerate() {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ToolButton::new(glyph, is_selected).show(ui).clicked() {
                        app.state_mut().select_sticker(index);
                    }
                }
                if ui.button("➕").on_hover_text("Add a custom sticker").clicked() {
                    app.open_sticker_prompt();
                }
            });

            let mut degrees = app.state().tools().rotation_degrees();
            if ui
                .add(Slider::new(&mut degrees, 0.0..=360.0).text("Rotation").suffix("°"))
                .changed()
            {
                app.state_mut().set_rotation_degrees(degrees);
            }
            ui.separator();

            // History
            ui.horizontal(|ui| {
                let can_undo = app.state().history().can_undo();
                let can_redo = app.state().history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.state_mut().undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.state_mut().redo();
                }
                if ui.button("Clear").clicked() {
                    app.state_mut().clear();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }
            ui.separator();

            let history = app.state().history();
            ui.horizontal(|ui| {
                ui.label(format!("Committed: {}", history.list().len()));
                ui.label(format!("Redo: {}", history.redo_buffer().len()));
            });

            egui::Grid::new("history_grid")
                .num_columns(2)
                .spacing([40.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Undo stack");
                    ui.strong("Redo stack");
                    ui.end_row();

                    let committed = history.list();
                    let redo = history.redo_buffer();
                    for i in 0..committed.len().max(redo.len()) {
                        ui.label(committed.get(i).map_or("", |d| d.kind()));
                        ui.label(redo.get(i).map_or("", |d| d.kind()));
                        ui.end_row();
                    }
                });
        });
}
