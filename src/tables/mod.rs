//! Lookup tables scoped to one detector invocation.
//!
//! The pipeline precomputes three tables before any image analysis runs:
//!
//! - [`DirToRad`] – integer ridge-flow direction → angle in radians.
//! - [`DftWaves`] – sinusoidal basis for per-block ridge frequency and
//!   orientation estimation.
//! - [`RotGrids`] – per-direction rotated pixel-offset grids, so the hot
//!   loops index a flat padded buffer instead of doing trigonometry per
//!   pixel.
//!
//! All three are plain owned values: building them acquires the resource and
//! dropping them (at scope exit inside the pipeline) releases it, in reverse
//! acquisition order.

mod grids;
mod waves;

pub use grids::RotGrids;
pub use waves::{DftWave, DftWaves};

use std::f64::consts::PI;

/// Direction-index → radians lookup table.
///
/// Ridge flow is ambiguous modulo π, so `ndirs` directions cover `[0, π)`.
#[derive(Clone, Debug)]
pub struct DirToRad {
    ndirs: usize,
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl DirToRad {
    pub fn new(ndirs: usize) -> Self {
        let mut cos = Vec::with_capacity(ndirs);
        let mut sin = Vec::with_capacity(ndirs);
        for dir in 0..ndirs {
            let theta = dir as f64 * PI / ndirs as f64;
            cos.push(theta.cos());
            sin.push(theta.sin());
        }
        Self { ndirs, cos, sin }
    }

    #[inline]
    pub fn ndirs(&self) -> usize {
        self.ndirs
    }

    /// Angle of direction index `dir` in radians, in `[0, π)`.
    #[inline]
    pub fn angle(&self, dir: usize) -> f64 {
        dir as f64 * PI / self.ndirs as f64
    }

    #[inline]
    pub fn cos(&self, dir: usize) -> f64 {
        self.cos[dir]
    }

    #[inline]
    pub fn sin(&self, dir: usize) -> f64 {
        self.sin[dir]
    }
}

/// The three tables consumed by map generation, borrowed for the duration
/// of that stage.
#[derive(Clone, Copy, Debug)]
pub struct DftTables<'a> {
    pub dir_to_rad: &'a DirToRad,
    pub waves: &'a DftWaves,
    pub grids: &'a RotGrids,
}

/// Maximum image padding required by the downstream samplers (stage 1 of the
/// pipeline, a pure function of the configuration).
///
/// The DFT window needs `window_size / 2 + window_offset` pixels; a rotated
/// directional-binarization grid stays inside half its diagonal at any
/// angle.
pub fn max_padding(
    window_size: usize,
    window_offset: usize,
    dirbin_grid_w: usize,
    dirbin_grid_h: usize,
) -> usize {
    let dft_pad = window_size / 2 + window_offset;
    let diag = ((dirbin_grid_w * dirbin_grid_w + dirbin_grid_h * dirbin_grid_h) as f64).sqrt();
    let dirbin_pad = (diag / 2.0).ceil() as usize;
    dft_pad.max(dirbin_pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_to_rad_covers_half_circle() {
        let table = DirToRad::new(16);
        assert_eq!(table.ndirs(), 16);
        assert!(table.angle(0).abs() < 1e-12);
        assert!((table.angle(8) - PI / 2.0).abs() < 1e-12);
        // strictly increasing, stays below pi
        for dir in 1..16 {
            assert!(table.angle(dir) > table.angle(dir - 1));
            assert!(table.angle(dir) < PI);
        }
        assert!((table.cos(4) - table.angle(4).cos()).abs() < 1e-12);
        assert!((table.sin(12) - table.angle(12).sin()).abs() < 1e-12);
    }

    #[test]
    fn max_padding_takes_the_larger_requirement() {
        // window dominates for the default geometry
        assert_eq!(max_padding(24, 8, 7, 9), 20);
        // a huge dirbin grid dominates instead
        assert_eq!(max_padding(8, 0, 60, 60), 43);
    }
}
