//! Face-aware cover cropping: resize one photo to many target frames,
//! keeping the subject in view.
//!
//! For every requested `(width, height)` the source is scaled with a cover
//! strategy (the frame is filled completely, excess is cropped), and the crop
//! window is centered on the detected subject — the bounding union of all
//! face boxes, or the image center when nothing is detected.
//!
//! # Example
//!
//! ```no_run
//! use smartresize::{SmartResizer, TargetSpec};
//!
//! let raw = std::fs::read("photo.jpg").unwrap();
//! let crops = SmartResizer::new(raw)
//!     .unwrap()
//!     .render(&TargetSpec::defaults())
//!     .unwrap();
//! for crop in &crops {
//!     std::fs::write(crop.filename(), &crop.data).unwrap();
//! }
//! ```
#![warn(missing_docs)]

mod encode;
mod error;
mod plan;
#[cfg(feature = "rustface")]
/// Built-in SeetaFace-based subject locator backend.
pub mod rustface_backend;
/// Subject detection traits and data types.
pub mod subject;

/// Error type returned by smartresize operations.
pub use error::SmartResizeError;
/// Cover-crop geometry: scale factor and crop-window placement.
pub use plan::CropPlan;
#[cfg(feature = "rustface")]
/// Built-in locator that runs the SeetaFace frontal-face detector.
pub use rustface_backend::RustfaceLocator;
/// Subject detection trait, bounding-box type, and union-center math.
pub use subject::{subject_center, SubjectBounds, SubjectLocator};

use image::DynamicImage;

/// Default JPEG quality for encoded crops.
const DEFAULT_QUALITY: u8 = 95;

/// One requested output frame.
#[derive(Debug, Clone)]
pub struct TargetSpec {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Descriptive label, carried through to the output. Never used in geometry.
    pub label: String,
}

impl TargetSpec {
    /// Create a target frame spec.
    pub fn new(width: u32, height: u32, label: impl Into<String>) -> Self {
        Self {
            width,
            height,
            label: label.into(),
        }
    }

    /// The stock target set: square, widescreen, and banner frames.
    pub fn defaults() -> Vec<TargetSpec> {
        vec![
            TargetSpec::new(1080, 1080, "square (1:1)"),
            TargetSpec::new(1920, 1080, "wide (16:9)"),
            TargetSpec::new(600, 400, "banner (3:2)"),
        ]
    }
}

/// One rendered crop: exactly the target dimensions, encoded as JPEG.
#[derive(Debug, Clone)]
pub struct RenderedCrop {
    /// Label copied from the target spec.
    pub label: String,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Encoded JPEG bytes.
    pub data: Vec<u8>,
}

impl RenderedCrop {
    /// Deterministic download name: `resized_{width}x{height}.jpg`.
    pub fn filename(&self) -> String {
        encode::output_filename(self.width, self.height)
    }
}

enum Source {
    Bytes(Vec<u8>),
    Decoded(DynamicImage),
}

/// Builder for rendering subject-centered crops of one source photo.
///
/// The subject locator runs once per source image; its result is reused for
/// every target frame. Without a locator every crop is centered on the image.
pub struct SmartResizer {
    source: Source,
    quality: u8,
    locator: Option<Box<dyn SubjectLocator>>,
}

impl SmartResizer {
    /// Create a resizer from raw image bytes (JPEG, PNG, or WebP).
    pub fn new(input: Vec<u8>) -> Result<Self, SmartResizeError> {
        // Validate that the input can be decoded
        image::guess_format(&input).map_err(|e| SmartResizeError::DecodeError(e.to_string()))?;

        Ok(Self {
            source: Source::Bytes(input),
            quality: DEFAULT_QUALITY,
            locator: None,
        })
    }

    /// Create a resizer from an already-decoded image.
    pub fn from_image(image: DynamicImage) -> Result<Self, SmartResizeError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(SmartResizeError::InvalidImage);
        }

        Ok(Self {
            source: Source::Decoded(image),
            quality: DEFAULT_QUALITY,
            locator: None,
        })
    }

    /// Set the JPEG quality from 1 to 100 (default: 95).
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Provide a subject locator implementation.
    ///
    /// A locator that finds nothing, or no locator at all, degrades to
    /// center cropping; detection is never allowed to fail the render.
    pub fn locator(mut self, locator: Box<dyn SubjectLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Render one JPEG crop per target.
    ///
    /// Fails with [`SmartResizeError::InvalidTarget`] on any zero-sized
    /// target and [`SmartResizeError::InvalidImage`] on a zero-sized source;
    /// no partial plan ever reaches the encoder.
    pub fn render(self, targets: &[TargetSpec]) -> Result<Vec<RenderedCrop>, SmartResizeError> {
        if self.quality == 0 || self.quality > 100 {
            return Err(SmartResizeError::InvalidQuality(self.quality));
        }
        let quality = self.quality;
        let (image, center) = self.prepare()?;

        let mut crops = Vec::with_capacity(targets.len());
        for target in targets {
            let plan = CropPlan::compute(
                image.width(),
                image.height(),
                center,
                target.width,
                target.height,
            )?;
            let rgb = encode::flatten_alpha(&plan.apply(&image));
            let data = encode::encode_jpeg(&rgb, quality)?;
            crops.push(RenderedCrop {
                label: target.label.clone(),
                width: target.width,
                height: target.height,
                data,
            });
        }

        Ok(crops)
    }

    /// Render one decoded crop per target, skipping JPEG encoding.
    ///
    /// For callers that do their own compression or display the crops
    /// directly. Each output image is exactly its target's dimensions.
    pub fn render_images(
        self,
        targets: &[TargetSpec],
    ) -> Result<Vec<DynamicImage>, SmartResizeError> {
        let (image, center) = self.prepare()?;

        let mut crops = Vec::with_capacity(targets.len());
        for target in targets {
            let plan = CropPlan::compute(
                image.width(),
                image.height(),
                center,
                target.width,
                target.height,
            )?;
            crops.push(plan.apply(&image));
        }

        Ok(crops)
    }

    /// Decode the source and compute the subject center once.
    fn prepare(self) -> Result<(DynamicImage, (f64, f64)), SmartResizeError> {
        let image = match self.source {
            Source::Bytes(bytes) => image::load_from_memory(&bytes)
                .map_err(|e| SmartResizeError::DecodeError(e.to_string()))?,
            Source::Decoded(image) => image,
        };
        if image.width() == 0 || image.height() == 0 {
            return Err(SmartResizeError::InvalidImage);
        }

        // Detection runs on a grayscale view; channel ordering of the source
        // never reaches the detector.
        let subjects = match &self.locator {
            Some(locator) => {
                let gray = image::imageops::grayscale(&image);
                locator.locate(gray.as_raw(), gray.width(), gray.height())
            }
            None => Vec::new(),
        };
        let center = subject_center(&subjects, image.width(), image.height());

        Ok((image, center))
    }
}
