use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageEncoder, RgbImage, RgbaImage};

use crate::error::SmartResizeError;

/// Flatten alpha by compositing onto a white background.
///
/// JPEG has no alpha channel, and dropping it naively turns transparent PNG
/// regions black.
pub(crate) fn flatten_alpha(image: &DynamicImage) -> RgbImage {
    let rgba: RgbaImage = image.to_rgba8();
    let (width, height) = (rgba.width(), rgba.height());
    let mut rgb = RgbImage::new(width, height);

    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let alpha = a as f32 / 255.0;
        let inv_alpha = 1.0 - alpha;
        // Composite over white (255, 255, 255)
        let out_r = (r as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_g = (g as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        let out_b = (b as f32 * alpha + 255.0 * inv_alpha).round() as u8;
        rgb.put_pixel(x, y, image::Rgb([out_r, out_g, out_b]));
    }

    rgb
}

/// Encode an RGB image as JPEG at the given quality (1–100).
pub(crate) fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, SmartResizeError> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| SmartResizeError::EncodeError(e.to_string()))?;
    Ok(buffer)
}

/// Deterministic download name for a rendered crop.
pub(crate) fn output_filename(width: u32, height: u32) -> String {
    format!("resized_{width}x{height}.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_rgb(width: u32, height: u32) -> RgbImage {
        let mut img = RgbImage::new(width, height);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = image::Rgb([
                (x * 255 / width.max(1)) as u8,
                (y * 255 / height.max(1)) as u8,
                128,
            ]);
        }
        img
    }

    #[test]
    fn encode_jpeg_produces_valid_output() {
        let img = make_test_rgb(48, 64);
        let data = encode_jpeg(&img, 95).unwrap();
        assert!(!data.is_empty());
        // JPEG magic bytes
        assert_eq!(data[0], 0xFF);
        assert_eq!(data[1], 0xD8);
    }

    #[test]
    fn lower_quality_encodes_smaller() {
        let img = make_test_rgb(64, 64);
        let high = encode_jpeg(&img, 95).unwrap();
        let low = encode_jpeg(&img, 20).unwrap();
        assert!(
            low.len() < high.len(),
            "q20 ({}) should be smaller than q95 ({})",
            low.len(),
            high.len()
        );
    }

    #[test]
    fn flatten_alpha_composites_over_white() {
        // Fully transparent pixel should become white
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([255, 0, 0, 0]));
        let dynamic = DynamicImage::ImageRgba8(rgba);
        let rgb = flatten_alpha(&dynamic);
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([255, 255, 255]));
    }

    #[test]
    fn flatten_alpha_preserves_opaque() {
        let mut rgba = RgbaImage::new(1, 1);
        rgba.put_pixel(0, 0, image::Rgba([100, 150, 200, 255]));
        let dynamic = DynamicImage::ImageRgba8(rgba);
        let rgb = flatten_alpha(&dynamic);
        assert_eq!(rgb.get_pixel(0, 0), &image::Rgb([100, 150, 200]));
    }

    #[test]
    fn flatten_alpha_blends_semitransparent() {
        let mut rgba = RgbaImage::new(1, 1);
        // 50% transparent red blends toward white
        rgba.put_pixel(0, 0, image::Rgba([255, 0, 0, 128]));
        let dynamic = DynamicImage::ImageRgba8(rgba);
        let rgb = flatten_alpha(&dynamic);
        let pixel = rgb.get_pixel(0, 0);
        assert!((pixel.0[0] as i16 - 255).abs() <= 1);
        assert!((pixel.0[1] as i16 - 127).abs() <= 2);
        assert!((pixel.0[2] as i16 - 127).abs() <= 2);
    }

    #[test]
    fn filename_matches_target_dimensions() {
        assert_eq!(output_filename(1080, 1080), "resized_1080x1080.jpg");
        assert_eq!(output_filename(600, 400), "resized_600x400.jpg");
    }
}
