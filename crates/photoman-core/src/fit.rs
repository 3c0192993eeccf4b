use crate::error::{PhotomanError, Result};

/// Display size for an image scaled uniformly into a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportFit {
    /// Uniform scale factor applied to the natural size.
    pub scale: f32,
    pub width: u32,
    pub height: u32,
}

/// Compute the largest uniform scaling of `(image_w, image_h)` that fits
/// inside `(viewport_w, viewport_h)` without exceeding either dimension.
///
/// The viewport may be zero-sized before the first layout pass; output
/// dimensions are clamped to 1 px so the result stays drawable.
pub fn fit_to_viewport(
    image_w: u32,
    image_h: u32,
    viewport_w: u32,
    viewport_h: u32,
) -> Result<ViewportFit> {
    if image_w == 0 || image_h == 0 {
        return Err(PhotomanError::InvalidDimensions {
            width: image_w,
            height: image_h,
        });
    }

    let fit_x = viewport_w as f32 / image_w as f32;
    let fit_y = viewport_h as f32 / image_h as f32;
    let scale = fit_x.min(fit_y);

    Ok(ViewportFit {
        scale,
        width: ((image_w as f32 * scale).round() as u32).max(1),
        height: ((image_h as f32 * scale).round() as u32).max(1),
    })
}
