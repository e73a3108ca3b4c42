use image::imageops::FilterType;
use image::DynamicImage;

use crate::error::SmartResizeError;

/// Scale factor and crop-window placement for one target frame.
///
/// Computed fresh per target and discarded after [`CropPlan::apply`].
/// Invariants: `resized_w >= target_w`, `resized_h >= target_h`,
/// `left <= resized_w - target_w`, `top <= resized_h - target_h`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropPlan {
    /// Uniform scale applied to the source before cropping.
    pub scale: f64,
    /// Width of the source after scaling.
    pub resized_w: u32,
    /// Height of the source after scaling.
    pub resized_h: u32,
    /// X offset of the crop window in the resized image.
    pub left: u32,
    /// Y offset of the crop window in the resized image.
    pub top: u32,
    /// Crop window width (the target width).
    pub target_w: u32,
    /// Crop window height (the target height).
    pub target_h: u32,
}

impl CropPlan {
    /// Compute the cover-crop plan for one target frame.
    ///
    /// The scale is the smallest that fills the frame completely on both
    /// axes (cover strategy, excess is cropped away). The crop window is
    /// centered on `center` (in source coordinates) and clamped so it never
    /// leaves the resized image.
    pub fn compute(
        orig_w: u32,
        orig_h: u32,
        center: (f64, f64),
        target_w: u32,
        target_h: u32,
    ) -> Result<CropPlan, SmartResizeError> {
        if orig_w == 0 || orig_h == 0 {
            return Err(SmartResizeError::InvalidImage);
        }
        if target_w == 0 || target_h == 0 {
            return Err(SmartResizeError::InvalidTarget {
                width: target_w,
                height: target_h,
            });
        }

        let scale = (target_w as f64 / orig_w as f64).max(target_h as f64 / orig_h as f64);

        // Rounding can undershoot the frame by a pixel; correct upward so the
        // crop window always fits.
        let resized_w = ((orig_w as f64 * scale).round() as u32).max(target_w);
        let resized_h = ((orig_h as f64 * scale).round() as u32).max(target_h);

        let (center_x, center_y) = center;
        let max_left = (resized_w - target_w) as f64;
        let max_top = (resized_h - target_h) as f64;
        let left = (center_x * scale - target_w as f64 / 2.0)
            .clamp(0.0, max_left)
            .round() as u32;
        let top = (center_y * scale - target_h as f64 / 2.0)
            .clamp(0.0, max_top)
            .round() as u32;

        Ok(CropPlan {
            scale,
            resized_w,
            resized_h,
            left,
            top,
            target_w,
            target_h,
        })
    }

    /// Resize the source with the plan's scale, then cut the crop window.
    ///
    /// Returns an image of exactly `target_w` × `target_h` pixels.
    /// Deterministic: identical inputs produce identical pixels.
    pub fn apply(&self, image: &DynamicImage) -> DynamicImage {
        image
            .resize_exact(self.resized_w, self.resized_h, FilterType::Lanczos3)
            .crop_imm(self.left, self.top, self.target_w, self.target_h)
    }
}
