mod app;
mod convert;
mod dialogs;
mod messages;
mod panels;
mod state;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title("Photoman"),
        ..Default::default()
    };

    eframe::run_native(
        "Photoman",
        options,
        Box::new(|_cc| Ok(Box::new(app::PhotomanApp::new()))),
    )
}
