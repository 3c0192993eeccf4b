use std::io::Write;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use photoman_core::decode::decode_image;
use photoman_core::error::PhotomanError;

/// Write a small synthetic PNG with distinct corner pixels.
fn write_test_png(dir: &TempDir, width: u32, height: u32) -> std::path::PathBuf {
    let mut img = RgbaImage::new(width, height);
    img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
    img.put_pixel(width - 1, height - 1, Rgba([0, 0, 255, 255]));

    let path = dir.path().join("test.png");
    img.save(&path).unwrap();
    path
}

#[test]
fn test_decode_reports_natural_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, 8, 6);

    let decoded = decode_image(&path).unwrap();
    assert_eq!(decoded.width, 8);
    assert_eq!(decoded.height, 6);
    assert_eq!(decoded.pixels.len(), 8 * 6 * 4);
}

#[test]
fn test_decode_preserves_pixel_values() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, 4, 4);

    let decoded = decode_image(&path).unwrap();
    // Top-left pixel is opaque red.
    assert_eq!(&decoded.pixels[0..4], &[255, 0, 0, 255]);
    // Bottom-right pixel is opaque blue.
    let last = decoded.pixels.len() - 4;
    assert_eq!(&decoded.pixels[last..], &[0, 0, 255, 255]);
}

#[test]
fn test_decode_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does_not_exist.png");

    assert!(decode_image(&path).is_err());
}

#[test]
fn test_decode_corrupt_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("corrupt.png");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(b"this is not a png").unwrap();

    let err = decode_image(&path).unwrap_err();
    assert!(matches!(err, PhotomanError::Image(_)));
}
