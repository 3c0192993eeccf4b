use std::path::PathBuf;

use photoman_core::formats::SUPPORTED_EXTENSIONS;

/// Present the modal image chooser. Blocks the UI thread until the user
/// picks a file or cancels; `None` means cancelled.
pub fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Image files", SUPPORTED_EXTENSIONS)
        .add_filter("All files", &["*"])
        .pick_file()
}
