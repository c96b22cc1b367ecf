//! Neighbor search and ridge counting.

use super::Minutiae;
use crate::detector::collaborators::RidgeCounter;
use crate::detector::DetectParams;
use crate::error::DetectError;
use crate::image::GrayImageU8;
use log::debug;

/// Reference ridge counter used by the default pipeline.
///
/// For every minutia the nearest later minutiae (at most `max_neighbors`,
/// within `max_ridge_distance`) become its neighbors, and the number of
/// distinct ridges crossed on the straight line toward each neighbor is
/// recorded.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRidgeCounter;

impl RidgeCounter for StandardRidgeCounter {
    fn count_ridges(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        params: &DetectParams,
    ) -> Result<(), DetectError> {
        let max_dist_sq = params.max_ridge_distance * params.max_ridge_distance;
        let mut annotated = 0usize;

        for i in 0..minutiae.len() {
            let (xi, yi) = {
                let m = minutiae.get(i);
                (m.x, m.y)
            };

            // nearest later minutiae within range
            let mut candidates: Vec<(usize, usize)> = Vec::new();
            for j in (i + 1)..minutiae.len() {
                let m = minutiae.get(j);
                let dx = m.x.abs_diff(xi);
                let dy = m.y.abs_diff(yi);
                let dist_sq = dx * dx + dy * dy;
                if dist_sq <= max_dist_sq {
                    candidates.push((dist_sq, j));
                }
            }
            candidates.sort_unstable();
            candidates.truncate(params.max_neighbors);

            let mut neighbors = Vec::with_capacity(candidates.len());
            let mut ridge_counts = Vec::with_capacity(candidates.len());
            for &(_, j) in &candidates {
                let m = minutiae.get(j);
                let crossings = ridge_crossings(packed, (xi, yi), (m.x, m.y));
                neighbors.push(j);
                ridge_counts.push(crossings);
            }
            if !neighbors.is_empty() {
                annotated += 1;
            }
            let m = minutiae.get_mut(i);
            m.neighbors = neighbors;
            m.ridge_counts = ridge_counts;
        }

        debug!(
            "ridge counts annotated for {annotated} of {} minutiae",
            minutiae.len()
        );
        Ok(())
    }
}

/// Number of valley→ridge crossings walking the Bresenham segment from `a`
/// to `b` on the packed image, endpoints excluded.
fn ridge_crossings(packed: &GrayImageU8, a: (usize, usize), b: (usize, usize)) -> i32 {
    let width = packed.width();
    let data = packed.data();
    let mut crossings = 0i32;
    let mut prev = 1u8; // start on the ridge of minutia `a`

    let (mut x, mut y) = (a.0 as i64, a.1 as i64);
    let (x1, y1) = (b.0 as i64, b.1 as i64);
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        if x == x1 && y == y1 {
            break;
        }
        let cur = data[y as usize * width + x as usize];
        if prev == 0 && cur == 1 {
            crossings += 1;
        }
        prev = cur;
    }
    crossings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutiae::{Minutia, MinutiaKind};

    fn minutia(x: usize, y: usize) -> Minutia {
        Minutia {
            x,
            y,
            kind: MinutiaKind::Ending,
            direction: 0,
            reliability: 1.0,
            neighbors: Vec::new(),
            ridge_counts: Vec::new(),
        }
    }

    /// Vertical one-pixel ridges every 4 columns.
    fn striped(width: usize, height: usize) -> GrayImageU8 {
        let mut data = vec![0u8; width * height];
        for y in 0..height {
            for x in (0..width).step_by(4) {
                data[y * width + x] = 1;
            }
        }
        GrayImageU8::new(width, height, data)
    }

    #[test]
    fn crossings_count_intermediate_ridges() {
        let packed = striped(32, 16);
        // walk from ridge column 4 to ridge column 16: columns 8 and 12 lie
        // between them
        assert_eq!(ridge_crossings(&packed, (4, 8), (16, 8)), 2);
        // adjacent ridges: nothing in between
        assert_eq!(ridge_crossings(&packed, (4, 8), (8, 8)), 0);
    }

    #[test]
    fn neighbors_are_nearest_and_bounded() {
        let params = DetectParams::default();
        let packed = striped(64, 64);
        let mut list = Minutiae::with_capacity(8).unwrap();
        list.push(minutia(8, 8));
        list.push(minutia(12, 8));
        list.push(minutia(24, 8));
        list.push(minutia(8, 40));

        StandardRidgeCounter
            .count_ridges(&mut list, &packed, &params)
            .unwrap();

        let first = list.get(0);
        assert_eq!(first.neighbors.len(), first.ridge_counts.len());
        assert!(first.neighbors.len() <= params.max_neighbors);
        // nearest neighbor first
        assert_eq!(first.neighbors[0], 1);
        // (12,8) → (24,8) crosses ridges at 16 and 20
        let second = list.get(1);
        assert_eq!(second.neighbors[0], 2);
        assert_eq!(second.ridge_counts[0], 2);
    }
}
