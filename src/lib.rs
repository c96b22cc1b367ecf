#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod mlp;
pub mod types;

// “Expert” modules – still public, but considered unstable internals.
// (You can tighten or feature-gate these later.)
pub mod binarize;
pub mod features;
pub mod maps;
pub mod minutiae;
pub mod tables;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + classifier + results.
pub use crate::detector::{DetectParams, RidgeDetector, Stages};
pub use crate::types::Detection;

pub use crate::mlp::{Activation, Classification, MlpClassifier};

// Emptiness verdict over the composite quality map.
pub use crate::maps::quality::{is_image_empty, quality_map};

// Error taxonomy.
pub use crate::error::{DetectError, MlpError};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ridge_quality::prelude::*;
///
/// # fn main() {
/// let (w, h) = (512usize, 512usize);
/// let gray = vec![128u8; w * h];
/// let img = ImageU8 { w, h, stride: w, data: &gray };
///
/// let detector = RidgeDetector::default();
/// match detector.detect(img, &DetectParams::default()) {
///     Ok(detection) => println!("minutiae={}", detection.minutiae.len()),
///     Err(err) => eprintln!("detection failed: {err}"),
/// }
/// # }
/// ```
pub mod prelude {
    pub use crate::image::ImageU8;
    pub use crate::{DetectParams, Detection, MlpClassifier, RidgeDetector};
}
