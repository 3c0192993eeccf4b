use photoman_core::decode::DecodedImage;

/// Convert a decoded RGBA8 buffer to an egui ColorImage.
pub fn decoded_to_color_image(decoded: &DecodedImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [decoded.width as usize, decoded.height as usize],
        &decoded.pixels,
    )
}
