//! Two-layer feed-forward quality classifier.
//!
//! A pure function over an immutable weight blob: no I/O, no state, no
//! side effects beyond the returned [`Classification`]. The weight layout
//! is one flat sequence `[W1 (n_hids×n_inps)][b1][W2 (n_outs×n_hids)][b2]`,
//! validated against the layer geometry before anything is computed.

mod activation;
mod classifier;
pub mod weights;

pub use activation::Activation;
pub use classifier::{Classification, MlpClassifier, MAX_HIDDEN};
pub use weights::WeightsFile;
