use std::path::Path;

use crate::error::Result;

/// A decoded image: natural pixel dimensions plus an RGBA8 buffer,
/// row-major, `width * height * 4` bytes.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode an image file into an RGBA8 buffer.
///
/// Synchronous; either returns the full decoded image or an error for a
/// missing, corrupt, or unsupported file.
pub fn decode_image(path: &Path) -> Result<DecodedImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!(path = %path.display(), width, height, "decoded image");

    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
