//! Serializable diagnostics emitted alongside detection results.
//!
//! Timing is a side channel: it never participates in the detection contract
//! and callers are free to ignore it.

use crate::maps::Maps;
use crate::minutiae::Minutiae;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the detection pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one `detect` invocation.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Summary of a detection run, suitable for JSON dumps by the tools.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub image_width: usize,
    pub image_height: usize,
    pub map_width: usize,
    pub map_height: usize,
    pub low_contrast_blocks: usize,
    pub low_flow_blocks: usize,
    pub high_curve_blocks: usize,
    pub minutiae_count: usize,
    pub endings: usize,
    pub bifurcations: usize,
    pub timing: TimingBreakdown,
}

impl DetectionReport {
    /// Build a report from the pieces of a successful detection.
    pub fn summarize(
        width: usize,
        height: usize,
        maps: &Maps,
        minutiae: &Minutiae,
        timing: &TimingBreakdown,
    ) -> Self {
        let nonzero = |cells: &[i32]| cells.iter().filter(|&&v| v != 0).count();
        let endings = minutiae
            .iter()
            .filter(|m| m.kind == crate::minutiae::MinutiaKind::Ending)
            .count();
        Self {
            image_width: width,
            image_height: height,
            map_width: maps.width(),
            map_height: maps.height(),
            low_contrast_blocks: nonzero(maps.low_contrast.as_slice()),
            low_flow_blocks: nonzero(maps.low_flow.as_slice()),
            high_curve_blocks: nonzero(maps.high_curve.as_slice()),
            minutiae_count: minutiae.len(),
            endings,
            bifurcations: minutiae.len() - endings,
            timing: timing.clone(),
        }
    }
}
