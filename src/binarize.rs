//! Default directional binarizer.
//!
//! Every pixel inside a block with a valid ridge-flow direction is compared
//! against its local neighborhood sampled through the center-anchored
//! rotated grid for that direction: if the grid row running through the
//! pixel is darker than the grid as a whole, the pixel sits on a ridge.
//! Pixels without direction information become valleys.

use crate::detector::collaborators::Binarizer;
use crate::detector::DetectParams;
use crate::error::DetectError;
use crate::image::ops::{BLACK_PIXEL, WHITE_PIXEL};
use crate::image::GrayImageU8;
use crate::maps::{BlockMap, INVALID_DIR};
use crate::tables::RotGrids;
use log::debug;

/// Reference binarizer used by the default pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBinarizer;

impl Binarizer for StandardBinarizer {
    fn binarize(
        &self,
        padded: &GrayImageU8,
        pad: usize,
        dims: (usize, usize),
        direction: &BlockMap,
        grids: &RotGrids,
        params: &DetectParams,
    ) -> Result<GrayImageU8, DetectError> {
        let (width, height) = dims;
        let pitch = padded.width();
        let data = padded.data();
        let grid_w = grids.grid_w();
        let grid_h = grids.grid_h();
        let center_row = grid_h / 2;

        let mut out = vec![WHITE_PIXEL; width * height];
        let mut ridge_pixels = 0usize;
        for y in 0..height {
            for x in 0..width {
                let dir = direction.get(x / params.block_size, y / params.block_size);
                if dir == INVALID_DIR {
                    continue;
                }
                let base = ((y + pad) * pitch + (x + pad)) as i64;
                let offsets = grids.offsets(dir as usize);

                let mut grid_sum = 0i64;
                let mut row_sum = 0i64;
                for r in 0..grid_h {
                    for c in 0..grid_w {
                        let sample =
                            i64::from(data[(base + i64::from(offsets[r * grid_w + c])) as usize]);
                        grid_sum += sample;
                        if r == center_row {
                            row_sum += sample;
                        }
                    }
                }

                // ridge when the center row is darker than the grid average
                if row_sum * (grid_h as i64) < grid_sum {
                    out[y * width + x] = BLACK_PIXEL;
                    ridge_pixels += 1;
                }
            }
        }

        debug!(
            "binarized {width}x{height}: {ridge_pixels} ridge pixels ({:.1}%)",
            100.0 * ridge_pixels as f64 / (width * height) as f64
        );
        Ok(GrayImageU8::new(width, height, out))
    }
}
