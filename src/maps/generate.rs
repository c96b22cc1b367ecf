//! Default map generator: per-block DFT direction analysis.
//!
//! Each block gets a window of the padded 6-bit image. A window whose
//! contrast is too small is marked low-contrast and keeps an invalid
//! direction. Otherwise the window is sampled along every candidate
//! direction through the rotated-grid table; the direction whose row sums
//! project most strongly onto the sinusoidal basis wins. A weak winner
//! relative to the total energy across directions marks the block low-flow.
//! A second pass flags high-curvature blocks where neighboring directions
//! lose axial coherence.

use super::{block_dims, BlockMap, Maps, INVALID_DIR};
use crate::detector::collaborators::MapGenerator;
use crate::detector::DetectParams;
use crate::error::DetectError;
use crate::image::GrayImageU8;
use crate::tables::DftTables;
use log::debug;

/// Reference map generator used by the default pipeline.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMapGenerator;

impl MapGenerator for StandardMapGenerator {
    fn generate(
        &self,
        padded: &GrayImageU8,
        pad: usize,
        dims: (usize, usize),
        tables: &DftTables<'_>,
        params: &DetectParams,
    ) -> Result<Maps, DetectError> {
        let (width, height) = dims;
        let (map_w, map_h) = block_dims(width, height, params.block_size);
        let mut maps = Maps::new(map_w, map_h);

        let window = params.window_size;
        let pitch = padded.width();
        let data = padded.data();
        let ndirs = tables.grids.ndirs();
        let mut rowsums = vec![0.0f64; window];

        for by in 0..map_h {
            for bx in 0..map_w {
                // window top-left in padded coordinates; the padding keeps
                // every rotated sample in bounds
                let x0 = (bx * params.block_size + pad) as isize - params.window_offset as isize;
                let y0 = (by * params.block_size + pad) as isize - params.window_offset as isize;
                let base = y0 as usize * pitch + x0 as usize;

                if window_contrast(data, base, pitch, window) < params.min_contrast {
                    maps.low_contrast.set(bx, by, 1);
                    maps.low_flow.set(bx, by, 1);
                    continue;
                }

                let mut best_dir = 0usize;
                let mut best_power = -1.0f64;
                let mut total_power = 0.0f64;
                for dir in 0..ndirs {
                    let offsets = tables.grids.offsets(dir);
                    for (r, rowsum) in rowsums.iter_mut().enumerate() {
                        let mut sum = 0i64;
                        for c in 0..window {
                            let idx = base as i64 + i64::from(offsets[r * window + c]);
                            sum += i64::from(data[idx as usize]);
                        }
                        *rowsum = sum as f64;
                    }
                    remove_mean(&mut rowsums);

                    let mut power = 0.0f64;
                    for w in 0..tables.waves.len() {
                        power = power.max(tables.waves.power(w, &rowsums));
                    }
                    total_power += power;
                    if power > best_power {
                        best_power = power;
                        best_dir = dir;
                    }
                }

                if total_power <= f64::EPSILON {
                    // contrast without oscillation: an edge, not ridges
                    maps.low_flow.set(bx, by, 1);
                    continue;
                }

                maps.direction.set(bx, by, best_dir as i32);
                if best_power / total_power < params.flow_strength_min {
                    maps.low_flow.set(bx, by, 1);
                }
            }
        }

        mark_high_curvature(&mut maps, tables, params.curve_coherence_min);

        debug!(
            "maps generated: {}x{} blocks, low_contrast={}, low_flow={}, high_curve={}",
            map_w,
            map_h,
            count_nonzero(&maps.low_contrast),
            count_nonzero(&maps.low_flow),
            count_nonzero(&maps.high_curve)
        );
        Ok(maps)
    }
}

fn window_contrast(data: &[u8], base: usize, pitch: usize, window: usize) -> i32 {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    for wy in 0..window {
        let row = &data[base + wy * pitch..base + wy * pitch + window];
        for &v in row {
            min = min.min(v);
            max = max.max(v);
        }
    }
    i32::from(max) - i32::from(min)
}

fn remove_mean(rowsums: &mut [f64]) {
    let mean = rowsums.iter().sum::<f64>() / rowsums.len() as f64;
    for r in rowsums.iter_mut() {
        *r -= mean;
    }
}

/// Flag valid blocks whose neighborhood directions lose axial coherence.
///
/// Directions are axial (ambiguous modulo π), so coherence is measured on
/// doubled angles: the mean resultant length of `exp(2iθ)` over the block
/// and its valid 8-neighbors. Short resultants mean the flow bends sharply.
fn mark_high_curvature(maps: &mut Maps, tables: &DftTables<'_>, coherence_min: f64) {
    let (map_w, map_h) = (maps.width(), maps.height());
    let direction = maps.direction.clone();
    for by in 0..map_h {
        for bx in 0..map_w {
            if direction.get(bx, by) == INVALID_DIR {
                continue;
            }
            let mut vx = 0.0f64;
            let mut vy = 0.0f64;
            let mut n = 0usize;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let nx = bx as i32 + dx;
                    let ny = by as i32 + dy;
                    if nx < 0 || ny < 0 || nx >= map_w as i32 || ny >= map_h as i32 {
                        continue;
                    }
                    let dir = direction.get(nx as usize, ny as usize);
                    if dir == INVALID_DIR {
                        continue;
                    }
                    let cos = tables.dir_to_rad.cos(dir as usize);
                    let sin = tables.dir_to_rad.sin(dir as usize);
                    // doubled angle from the table entries
                    vx += cos * cos - sin * sin;
                    vy += 2.0 * sin * cos;
                    n += 1;
                }
            }
            if n < 3 {
                continue;
            }
            let resultant = (vx * vx + vy * vy).sqrt() / n as f64;
            if resultant < coherence_min {
                maps.high_curve.set(bx, by, 1);
            }
        }
    }
}

fn count_nonzero(map: &BlockMap) -> usize {
    map.as_slice().iter().filter(|&&v| v != 0).count()
}
