use crate::app::PhotomanApp;

pub fn show(ctx: &egui::Context, app: &mut PhotomanApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space for 3 empty lines to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(cursor) = app.history.cursor() {
                ui.label(&app.viewport.viewing_label);
                ui.separator();
                ui.label(format!("{}/{}", cursor + 1, app.history.len()));
                if let Some(size) = app.viewport.image_size {
                    ui.separator();
                    ui.label(format!("{}x{}", size[0], size[1]));
                }
            } else {
                ui.label("No images");
            }
        });

        ui.add_space(2.0);
    });
}
