use std::path::Path;

use crate::error::{PhotomanError, Result};

/// File extensions accepted by the image picker, lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// True iff the file name carries a supported image extension,
/// compared case-insensitively.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Validate a candidate file before it enters the history.
pub fn ensure_supported(path: &Path) -> Result<()> {
    if is_supported(path) {
        Ok(())
    } else {
        Err(PhotomanError::UnsupportedExtension(path.to_path_buf()))
    }
}
