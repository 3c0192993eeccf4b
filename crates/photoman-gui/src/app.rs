use std::path::PathBuf;

use photoman_core::decode::decode_image;
use photoman_core::formats::ensure_supported;
use photoman_core::history::History;

use crate::convert::decoded_to_color_image;
use crate::dialogs;
use crate::messages::Command;
use crate::panels;
use crate::state::{DisplayPhase, UIState, ViewportState};

pub struct PhotomanApp {
    pub history: History<PathBuf>,
    pub ui_state: UIState,
    pub viewport: ViewportState,
}

impl PhotomanApp {
    pub fn new() -> Self {
        Self {
            history: History::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
        }
    }

    /// Execute one user action: mutate/query the history, then refresh
    /// the display from the resulting state.
    pub fn dispatch(&mut self, ctx: &egui::Context, cmd: Command) {
        tracing::debug!(?cmd, "dispatch");
        match cmd {
            Command::Upload => self.upload(ctx),
            Command::Replace => self.replace(ctx),
            Command::Delete => self.delete(ctx),
            Command::Previous => {
                if self.history.move_previous() {
                    self.show_current(ctx);
                }
            }
            Command::Next => {
                if self.history.move_next() {
                    self.show_current(ctx);
                }
            }
        }
    }

    fn upload(&mut self, ctx: &egui::Context) {
        let Some(path) = dialogs::pick_image_file() else {
            return;
        };
        if let Err(err) = ensure_supported(&path) {
            self.ui_state.notify_error(err.to_string());
            return;
        }
        self.ui_state
            .add_log(format!("Added: {}", path.display()));
        self.history.push(path);
        self.show_current(ctx);
    }

    fn replace(&mut self, ctx: &egui::Context) {
        if self.history.is_empty() {
            self.ui_state
                .notify_error("Upload an image first to replace it.".into());
            return;
        }
        let Some(path) = dialogs::pick_image_file() else {
            return;
        };
        if let Err(err) = ensure_supported(&path) {
            self.ui_state.notify_error(err.to_string());
            return;
        }
        let log_line = format!("Replaced with: {}", path.display());
        if let Err(err) = self.history.replace_current(path) {
            self.ui_state.notify_error(err.to_string());
            return;
        }
        self.ui_state.add_log(log_line);
        self.show_current(ctx);
    }

    fn delete(&mut self, ctx: &egui::Context) {
        match self.history.remove_current() {
            Ok(removed) => {
                self.ui_state
                    .add_log(format!("Removed: {}", removed.display()));
                self.show_current(ctx);
            }
            Err(_) => {
                self.ui_state.notify_error("No image to delete.".into());
            }
        }
    }

    /// Refresh the viewport from the history's current entry. The entry
    /// stays in the history even if it fails to decode; the user can
    /// replace or delete it.
    fn show_current(&mut self, ctx: &egui::Context) {
        let Some(path) = self.history.current().cloned() else {
            self.viewport.clear();
            self.ui_state.phase = DisplayPhase::Empty;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title("Photoman".into()));
            return;
        };

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match decode_image(&path) {
            Ok(decoded) => {
                let image = decoded_to_color_image(&decoded);
                let texture = ctx.load_texture("viewport", image, egui::TextureOptions::LINEAR);
                self.viewport.texture = Some(texture);
                self.viewport.image_size = Some([decoded.width, decoded.height]);
                self.viewport.viewing_label = name.clone();
                self.ui_state.phase = DisplayPhase::Loaded;
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!("Photoman — {name}")));
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "decode failed");
                self.viewport.texture = None;
                self.viewport.image_size = None;
                self.viewport.viewing_label = name;
                self.ui_state.phase = DisplayPhase::DecodeFailed;
                self.ui_state
                    .notify_error(format!("Error loading image: {err}"));
            }
        }
    }
}

impl eframe::App for PhotomanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::menu_bar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // Error notification dialog
        if let Some(message) = self.ui_state.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(message);
                        ui.add_space(8.0);
                        if ui.button("OK").clicked() {
                            self.ui_state.error_message = None;
                        }
                    });
                });
        }

        // About dialog
        if self.ui_state.show_about {
            egui::Window::new("About Photoman")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Photoman");
                        ui.label("Photo browsing and management");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
