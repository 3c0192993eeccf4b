use crate::app::PhotomanApp;
use crate::messages::Command;

/// Button row: Previous | Upload | Replace | Delete | Next.
/// Navigation buttons follow the history's availability flags.
pub fn show(ctx: &egui::Context, app: &mut PhotomanApp) {
    egui::TopBottomPanel::bottom("controls").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let has_current = !app.history.is_empty();
            let mut pending = None;

            if ui
                .add_enabled(app.history.can_go_previous(), egui::Button::new("Previous"))
                .clicked()
            {
                pending = Some(Command::Previous);
            }
            if ui.button("Upload").clicked() {
                pending = Some(Command::Upload);
            }
            if ui
                .add_enabled(has_current, egui::Button::new("Replace"))
                .clicked()
            {
                pending = Some(Command::Replace);
            }
            if ui
                .add_enabled(has_current, egui::Button::new("Delete"))
                .clicked()
            {
                pending = Some(Command::Delete);
            }
            if ui
                .add_enabled(app.history.can_go_next(), egui::Button::new("Next"))
                .clicked()
            {
                pending = Some(Command::Next);
            }

            if let Some(cmd) = pending {
                app.dispatch(ctx, cmd);
            }
        });
        ui.add_space(4.0);
    });
}
