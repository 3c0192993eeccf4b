use crate::app::PhotomanApp;
use crate::messages::Command;

pub fn show(ctx: &egui::Context, app: &mut PhotomanApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui
                    .add(
                        egui::Button::new("Open...")
                            .shortcut_text(ctx.format_shortcut(&open_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.dispatch(ctx, Command::Upload);
                }

                let replace_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::R);
                if ui
                    .add(
                        egui::Button::new("Replace...")
                            .shortcut_text(ctx.format_shortcut(&replace_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.dispatch(ctx, Command::Replace);
                }

                ui.separator();

                let quit_shortcut =
                    egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui
                    .add(
                        egui::Button::new("Quit")
                            .shortcut_text(ctx.format_shortcut(&quit_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });
    });

    // Keyboard shortcuts (consumed outside menus)
    if ctx.input_mut(|i| {
        i.consume_shortcut(&egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND,
            egui::Key::O,
        ))
    }) {
        app.dispatch(ctx, Command::Upload);
    }
    if ctx.input_mut(|i| {
        i.consume_shortcut(&egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND,
            egui::Key::R,
        ))
    }) {
        app.dispatch(ctx, Command::Replace);
    }
    if ctx.input_mut(|i| {
        i.consume_shortcut(&egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND,
            egui::Key::Q,
        ))
    }) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    // Arrow keys navigate the history when no text field wants them.
    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowLeft)) {
        app.dispatch(ctx, Command::Previous);
    }
    if ctx.input_mut(|i| i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowRight)) {
        app.dispatch(ctx, Command::Next);
    }
}
