use photoman_core::fit::fit_to_viewport;

use crate::app::PhotomanApp;
use crate::state::DisplayPhase;

pub fn show(ctx: &egui::Context, app: &mut PhotomanApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        match app.ui_state.phase {
            DisplayPhase::Loaded => {
                if let (Some(texture), Some(size)) =
                    (app.viewport.texture.as_ref(), app.viewport.image_size)
                {
                    draw_fitted_image(ui, rect, texture.id(), size);
                    draw_viewing_label(ui, rect, &app.viewport.viewing_label);
                }
            }
            DisplayPhase::DecodeFailed => {
                show_placeholder(ui, "Error loading image");
                draw_viewing_label(ui, rect, &app.viewport.viewing_label);
            }
            DisplayPhase::Empty => {
                show_placeholder(ui, "No image selected");
            }
        }
    });
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

/// Scale the image uniformly to fit the panel, recomputed from the
/// current rect every frame, and draw it centred.
fn draw_fitted_image(
    ui: &egui::Ui,
    rect: egui::Rect,
    texture_id: egui::TextureId,
    image_size: [u32; 2],
) {
    let fit = match fit_to_viewport(
        image_size[0],
        image_size[1],
        rect.width().floor() as u32,
        rect.height().floor() as u32,
    ) {
        Ok(fit) => fit,
        Err(_) => return,
    };

    let img_rect = egui::Rect::from_center_size(
        rect.center(),
        egui::vec2(fit.width as f32, fit.height as f32),
    );
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(message)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
