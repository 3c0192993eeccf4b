use approx::assert_relative_eq;

use photoman_core::error::PhotomanError;
use photoman_core::fit::fit_to_viewport;

#[test]
fn test_wide_image_limited_by_width() {
    let fit = fit_to_viewport(200, 100, 100, 100).unwrap();
    assert_relative_eq!(fit.scale, 0.5);
    assert_eq!((fit.width, fit.height), (100, 50));
}

#[test]
fn test_tall_image_limited_by_height() {
    let fit = fit_to_viewport(100, 200, 100, 100).unwrap();
    assert_relative_eq!(fit.scale, 0.5);
    assert_eq!((fit.width, fit.height), (50, 100));
}

#[test]
fn test_exact_fit() {
    let fit = fit_to_viewport(640, 480, 640, 480).unwrap();
    assert_relative_eq!(fit.scale, 1.0);
    assert_eq!((fit.width, fit.height), (640, 480));
}

#[test]
fn test_upscales_small_image() {
    let fit = fit_to_viewport(100, 50, 400, 400).unwrap();
    assert_relative_eq!(fit.scale, 4.0);
    assert_eq!((fit.width, fit.height), (400, 200));
}

#[test]
fn test_zero_viewport_clamps_output_to_one_pixel() {
    // Viewport not yet laid out: scale collapses to zero but the output
    // stays drawable.
    let fit = fit_to_viewport(100, 100, 0, 50).unwrap();
    assert_relative_eq!(fit.scale, 0.0);
    assert_eq!((fit.width, fit.height), (1, 1));
}

#[test]
fn test_both_viewport_dimensions_zero() {
    let fit = fit_to_viewport(1920, 1080, 0, 0).unwrap();
    assert_relative_eq!(fit.scale, 0.0);
    assert_eq!((fit.width, fit.height), (1, 1));
}

#[test]
fn test_rounds_output_dimensions() {
    // scale = 2/3; height 2 * 2/3 = 1.33 rounds down to 1.
    let fit = fit_to_viewport(3, 2, 2, 2).unwrap();
    assert_eq!((fit.width, fit.height), (2, 1));
}

#[test]
fn test_zero_image_width_is_invalid() {
    let err = fit_to_viewport(0, 100, 640, 480).unwrap_err();
    assert!(matches!(
        err,
        PhotomanError::InvalidDimensions { width: 0, height: 100 }
    ));
}

#[test]
fn test_zero_image_height_is_invalid() {
    let err = fit_to_viewport(100, 0, 640, 480).unwrap_err();
    assert!(matches!(
        err,
        PhotomanError::InvalidDimensions { width: 100, height: 0 }
    ));
}
