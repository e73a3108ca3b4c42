use std::io::Cursor;
use std::path::Path;

use crate::error::SmartResizeError;
use crate::subject::{SubjectBounds, SubjectLocator};

/// Subject locator backed by the `rustface` crate (SeetaFace engine).
///
/// The SeetaFace frontal-face model is not bundled; load it from a file or
/// an in-memory buffer. Loading is fallible so callers can fall back to
/// center cropping by simply not installing a locator:
///
/// ```no_run
/// use smartresize::{RustfaceLocator, SmartResizer, TargetSpec};
///
/// let raw = std::fs::read("photo.jpg").unwrap();
/// let mut resizer = SmartResizer::new(raw).unwrap();
/// if let Ok(locator) = RustfaceLocator::from_model_file("seeta_fd_frontal_v1.0.bin") {
///     resizer = resizer.locator(Box::new(locator));
/// }
/// let crops = resizer.render(&TargetSpec::defaults()).unwrap();
/// # let _ = crops;
/// ```
pub struct RustfaceLocator {
    model: rustface::Model,
}

impl RustfaceLocator {
    /// Load a SeetaFace model from a file on disk.
    pub fn from_model_file(path: impl AsRef<Path>) -> Result<Self, SmartResizeError> {
        let data =
            std::fs::read(path).map_err(|e| SmartResizeError::ModelError(e.to_string()))?;
        Self::from_model_bytes(&data)
    }

    /// Load a SeetaFace model from an in-memory buffer.
    pub fn from_model_bytes(data: &[u8]) -> Result<Self, SmartResizeError> {
        let model = rustface::read_model(Cursor::new(data))
            .map_err(|e| SmartResizeError::ModelError(e.to_string()))?;
        Ok(Self { model })
    }
}

impl SubjectLocator for RustfaceLocator {
    fn locate(&self, gray: &[u8], width: u32, height: u32) -> Vec<SubjectBounds> {
        let mut detector = rustface::create_detector_with_model(self.model.clone());
        detector.set_min_face_size(20);
        detector.set_score_thresh(2.0);
        detector.set_pyramid_scale_factor(0.8);
        detector.set_slide_window_step(4, 4);

        let faces = detector.detect(&rustface::ImageData::new(gray, width, height));

        faces
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                SubjectBounds {
                    x: bbox.x() as f64,
                    y: bbox.y() as f64,
                    width: bbox.width() as f64,
                    height: bbox.height() as f64,
                    confidence: face.score(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_file_is_an_error() {
        let result = RustfaceLocator::from_model_file("/nonexistent/model.bin");
        assert!(matches!(result, Err(SmartResizeError::ModelError(_))));
    }

    #[test]
    fn corrupt_model_bytes_are_an_error() {
        let result = RustfaceLocator::from_model_bytes(b"not a model");
        assert!(matches!(result, Err(SmartResizeError::ModelError(_))));
    }
}
