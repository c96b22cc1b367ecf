//! Composite quality map and the empty-image verdict.

use super::{BlockMap, Maps};

/// Chebyshev radius searched for defective blocks when promoting a block to
/// the top quality level.
const PROMOTE_RADIUS: i32 = 2;

/// Derive the composite per-block quality map (0–4, 0 = unusable) from the
/// four detection maps.
///
/// Low-contrast blocks score 0, low-flow 1, high-curvature 2. The remaining
/// blocks score 3, promoted to 4 when no defective block lies within a
/// 2-block neighborhood.
pub fn quality_map(maps: &Maps) -> BlockMap {
    let (w, h) = (maps.width(), maps.height());
    let mut quality = BlockMap::new(w, h, 0);
    for by in 0..h {
        for bx in 0..w {
            let q = if maps.low_contrast.get(bx, by) != 0 {
                0
            } else if maps.low_flow.get(bx, by) != 0 {
                1
            } else if maps.high_curve.get(bx, by) != 0 {
                2
            } else if has_defect_near(maps, bx as i32, by as i32) {
                3
            } else {
                4
            };
            quality.set(bx, by, q);
        }
    }
    quality
}

fn has_defect_near(maps: &Maps, bx: i32, by: i32) -> bool {
    let (w, h) = (maps.width() as i32, maps.height() as i32);
    for dy in -PROMOTE_RADIUS..=PROMOTE_RADIUS {
        for dx in -PROMOTE_RADIUS..=PROMOTE_RADIUS {
            let nx = bx + dx;
            let ny = by + dy;
            if nx < 0 || ny < 0 || nx >= w || ny >= h {
                continue;
            }
            let (nx, ny) = (nx as usize, ny as usize);
            if maps.low_contrast.get(nx, ny) != 0
                || maps.low_flow.get(nx, ny) != 0
                || maps.high_curve.get(nx, ny) != 0
            {
                return true;
            }
        }
    }
    false
}

/// Decide whether the image behind a quality map is empty.
///
/// This is designed as a conjunction of statistical tests and can grow more
/// clauses; today the quality-map test is the only one.
pub fn is_image_empty(quality: &BlockMap) -> bool {
    is_quality_map_empty(quality)
}

/// True iff every cell of the quality map is zero.
fn is_quality_map_empty(quality: &BlockMap) -> bool {
    for &cell in quality.as_slice() {
        if cell != 0 {
            return false;
        }
    }
    true
}
