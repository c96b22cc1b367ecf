//! Weight-file loading for the binaries.
//!
//! The core classifier only ever sees a flat `&[f64]`; this module is the
//! boundary where a JSON description of a trained network (geometry,
//! activation names, weights, z-normalization statistics for the feature
//! vector) becomes a validated [`MlpClassifier`] plus blob.

use super::{Activation, MlpClassifier};
use crate::error::MlpError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// On-disk description of a trained network.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightsFile {
    pub n_inps: usize,
    pub n_hids: usize,
    pub n_outs: usize,
    pub hidden_activation: String,
    pub output_activation: String,
    pub weights: Vec<f64>,
    /// Per-feature mean subtracted before classification.
    #[serde(default)]
    pub znorm_mean: Vec<f64>,
    /// Per-feature standard deviation divided out before classification.
    #[serde(default)]
    pub znorm_stddev: Vec<f64>,
}

impl WeightsFile {
    pub fn load(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read weights {}: {e}", path.display()))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Failed to parse weights {}: {e}", path.display()))
    }

    /// Validate the description into a classifier; the weight blob itself is
    /// checked again at classification time.
    pub fn classifier(&self) -> Result<MlpClassifier, MlpError> {
        let hidden = Activation::from_name(&self.hidden_activation)?;
        let output = Activation::from_name(&self.output_activation)?;
        let classifier = MlpClassifier::new(self.n_inps, self.n_hids, self.n_outs, hidden, output)?;
        if self.weights.len() != classifier.weight_count() {
            return Err(MlpError::WeightCount {
                got: self.weights.len(),
                want: classifier.weight_count(),
            });
        }
        Ok(classifier)
    }
}
