//! Parameter types configuring the detection pipeline.
//!
//! Defaults follow the classic minutiae-detection configuration: 8-pixel
//! blocks analyzed through a 24-pixel window, 16 ridge-flow directions, a
//! 7×9 directional-binarization grid. For tuning, start with the contrast
//! and flow thresholds.

use std::f64::consts::FRAC_PI_2;

/// Pipeline-wide parameters, read-only for the whole run.
#[derive(Clone, Debug)]
pub struct DetectParams {
    /// Side of the square map block in pixels (>=1).
    pub block_size: usize,
    /// Side of the square DFT analysis window in pixels.
    pub window_size: usize,
    /// Offset of the window relative to its block origin.
    pub window_offset: usize,
    /// Directional-binarization grid width (odd).
    pub dirbin_grid_w: usize,
    /// Directional-binarization grid height (odd).
    pub dirbin_grid_h: usize,
    /// Number of candidate ridge-flow directions over [0, π).
    pub num_directions: usize,
    /// Number of DFT waves (frequencies 1..=n across the window).
    pub num_dft_waves: usize,
    /// Border fill value for the padded working copy.
    pub pad_value: u8,
    /// Angle of direction index 0 in radians.
    pub start_angle: f64,
    /// Minimum window contrast in the 6-bit domain; below is low-contrast.
    pub min_contrast: i32,
    /// Minimum winning share of directional DFT power; below is low-flow.
    pub flow_strength_min: f64,
    /// Minimum axial coherence of neighboring directions; below is
    /// high-curvature.
    pub curve_coherence_min: f64,
    /// Fixed capacity of the minutiae list.
    pub max_minutiae: usize,
    /// Reliability floor applied during pruning.
    pub min_reliability: f64,
    /// Pixels trimmed from the image edge during pruning.
    pub prune_border: usize,
    /// Minimum pixel distance between retained minutiae.
    pub prune_min_distance: usize,
    /// Maximum annotated neighbors per minutia.
    pub max_neighbors: usize,
    /// Maximum pixel distance to an annotated neighbor.
    pub max_ridge_distance: usize,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            block_size: 8,
            window_size: 24,
            window_offset: 8,
            dirbin_grid_w: 7,
            dirbin_grid_h: 9,
            num_directions: 16,
            num_dft_waves: 4,
            pad_value: 128,
            start_angle: FRAC_PI_2,
            min_contrast: 6,
            flow_strength_min: 0.1,
            curve_coherence_min: 0.7,
            max_minutiae: 1000,
            min_reliability: 0.3,
            prune_border: 10,
            prune_min_distance: 5,
            max_neighbors: 5,
            max_ridge_distance: 64,
        }
    }
}
