/// Bounding box of a detected subject within the source image.
#[derive(Debug, Clone)]
pub struct SubjectBounds {
    /// X coordinate of the top-left corner (pixels).
    pub x: f64,
    /// Y coordinate of the top-left corner (pixels).
    pub y: f64,
    /// Width of the bounding box (pixels).
    pub width: f64,
    /// Height of the bounding box (pixels).
    pub height: f64,
    /// Detection confidence score.
    pub confidence: f64,
}

/// Pluggable subject detection backend.
///
/// Implement this trait to provide a custom detector (ONNX, dlib, etc.)
/// and pass it to [`crate::SmartResizer::locator`]. Detection must not fail
/// past this boundary: a backend that cannot run returns an empty vec and
/// the pipeline falls back to center cropping.
pub trait SubjectLocator: Send + Sync {
    /// Locate subjects in a row-major grayscale buffer of `width` × `height` bytes.
    fn locate(&self, gray: &[u8], width: u32, height: u32) -> Vec<SubjectBounds>;
}

/// Center of attention for crop placement, in source-image coordinates.
///
/// With no detections this is the image center. Otherwise it is the midpoint
/// of the axis-aligned bounding union of every detected box — multiple faces
/// are treated as one composite subject, which keeps group photos framed
/// instead of zooming in on a single face.
pub fn subject_center(subjects: &[SubjectBounds], width: u32, height: u32) -> (f64, f64) {
    if subjects.is_empty() {
        return (width as f64 / 2.0, height as f64 / 2.0);
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for subject in subjects {
        min_x = min_x.min(subject.x);
        min_y = min_y.min(subject.y);
        max_x = max_x.max(subject.x + subject.width);
        max_y = max_y.max(subject.y + subject.height);
    }

    ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(x: f64, y: f64, width: f64, height: f64) -> SubjectBounds {
        SubjectBounds {
            x,
            y,
            width,
            height,
            confidence: 1.0,
        }
    }

    #[test]
    fn empty_set_falls_back_to_image_center() {
        let center = subject_center(&[], 1000, 500);
        assert_eq!(center, (500.0, 250.0));
    }

    #[test]
    fn single_subject_center_is_box_center() {
        let center = subject_center(&[bounds(100.0, 200.0, 50.0, 60.0)], 1000, 1000);
        assert_eq!(center, (125.0, 230.0));
    }

    #[test]
    fn union_center_is_not_average_of_box_centers() {
        // A tiny box at the top-left and a large one at the bottom-right.
        // The union spans (10,10)..(900,900) → center (455, 455). Averaging
        // the individual centers would give (330, 330) instead.
        let subjects = [bounds(10.0, 10.0, 20.0, 20.0), bounds(600.0, 600.0, 300.0, 300.0)];
        let center = subject_center(&subjects, 1000, 1000);
        assert_eq!(center, (455.0, 455.0));

        let avg_of_centers = ((20.0 + 750.0) / 2.0, (20.0 + 750.0) / 2.0);
        assert_ne!(center, avg_of_centers);
    }

    #[test]
    fn disjoint_boxes_use_combined_extent() {
        let subjects = [bounds(0.0, 0.0, 100.0, 100.0), bounds(300.0, 0.0, 100.0, 100.0)];
        let center = subject_center(&subjects, 400, 400);
        assert_eq!(center, (200.0, 50.0));
    }
}
