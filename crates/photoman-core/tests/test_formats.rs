use std::path::Path;

use photoman_core::error::PhotomanError;
use photoman_core::formats::{ensure_supported, is_supported};

#[test]
fn test_accepts_all_allowed_extensions() {
    for name in ["a.jpg", "a.jpeg", "a.png", "a.gif"] {
        assert!(is_supported(Path::new(name)), "{name} should be accepted");
    }
}

#[test]
fn test_extension_check_is_case_insensitive() {
    for name in ["photo.JPG", "photo.Jpeg", "photo.PNG", "photo.GiF"] {
        assert!(is_supported(Path::new(name)), "{name} should be accepted");
    }
}

#[test]
fn test_rejects_other_extensions() {
    for name in ["a.bmp", "a.tiff", "a.webp", "a.txt", "a.jpg.pdf"] {
        assert!(!is_supported(Path::new(name)), "{name} should be rejected");
    }
}

#[test]
fn test_rejects_extensionless_names() {
    assert!(!is_supported(Path::new("no_extension")));
    assert!(!is_supported(Path::new("")));
}

#[test]
fn test_accepts_full_paths() {
    assert!(is_supported(Path::new("/home/user/Pictures/cat.png")));
}

#[test]
fn test_ensure_supported_reports_rejected_path() {
    let err = ensure_supported(Path::new("notes.txt")).unwrap_err();
    match err {
        PhotomanError::UnsupportedExtension(path) => {
            assert_eq!(path, Path::new("notes.txt"));
        }
        other => panic!("unexpected error: {other}"),
    }
}
