//! Crossing-number minutiae detection on the packed binary image.

use super::{Minutia, MinutiaKind, Minutiae};
use crate::detector::collaborators::MinutiaeFinder;
use crate::detector::DetectParams;
use crate::error::DetectError;
use crate::image::GrayImageU8;
use crate::maps::{Maps, INVALID_DIR};
use log::debug;

/// 8-neighborhood in cyclic order, starting east.
const RING: [(i32, i32); 8] = [
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Reference minutiae finder used by the default pipeline.
///
/// Scans interior ridge pixels of the packed {0,1} image and classifies
/// them by crossing number: one ridge/valley alternation around the pixel
/// marks an ending, three mark a bifurcation. Blocks without a valid
/// direction contribute nothing; reliability is damped in low-flow and
/// high-curvature blocks.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardMinutiaeFinder;

impl MinutiaeFinder for StandardMinutiaeFinder {
    fn detect(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        maps: &Maps,
        params: &DetectParams,
    ) -> Result<(), DetectError> {
        let width = packed.width();
        let height = packed.height();
        let data = packed.data();

        'scan: for y in 1..height.saturating_sub(1) {
            for x in 1..width.saturating_sub(1) {
                if data[y * width + x] != 1 {
                    continue;
                }
                let cn = crossing_number(data, width, x, y);
                let kind = match cn {
                    1 => MinutiaKind::Ending,
                    3 => MinutiaKind::Bifurcation,
                    _ => continue,
                };

                let bx = x / params.block_size;
                let by = y / params.block_size;
                let direction = maps.direction.get(bx, by);
                if direction == INVALID_DIR {
                    continue;
                }
                let mut reliability = 1.0;
                if maps.low_flow.get(bx, by) != 0 {
                    reliability *= 0.5;
                }
                if maps.high_curve.get(bx, by) != 0 {
                    reliability *= 0.75;
                }

                let appended = minutiae.push(Minutia {
                    x,
                    y,
                    kind,
                    direction,
                    reliability,
                    neighbors: Vec::new(),
                    ridge_counts: Vec::new(),
                });
                if !appended {
                    debug!("minutiae list full at capacity {}", minutiae.capacity());
                    break 'scan;
                }
            }
        }

        debug!("detected {} candidate minutiae", minutiae.len());
        Ok(())
    }
}

/// Number of 0→1 alternations around `(x, y)`, walking the 8-neighborhood
/// cyclically.
fn crossing_number(data: &[u8], width: usize, x: usize, y: usize) -> u32 {
    let sample = |dx: i32, dy: i32| -> u32 {
        let nx = (x as i32 + dx) as usize;
        let ny = (y as i32 + dy) as usize;
        u32::from(data[ny * width + nx])
    };
    let mut transitions = 0u32;
    for i in 0..RING.len() {
        let (dx0, dy0) = RING[i];
        let (dx1, dy1) = RING[(i + 1) % RING.len()];
        if sample(dx0, dy0) == 0 && sample(dx1, dy1) == 1 {
            transitions += 1;
        }
    }
    transitions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(width: usize, height: usize, ridge: &[(usize, usize)]) -> GrayImageU8 {
        let mut data = vec![0u8; width * height];
        for &(x, y) in ridge {
            data[y * width + x] = 1;
        }
        GrayImageU8::new(width, height, data)
    }

    fn valid_maps(width: usize, height: usize, block_size: usize) -> Maps {
        let (mw, mh) = crate::maps::block_dims(width, height, block_size);
        let mut maps = Maps::new(mw, mh);
        for by in 0..mh {
            for bx in 0..mw {
                maps.direction.set(bx, by, 2);
            }
        }
        maps
    }

    #[test]
    fn line_end_is_an_ending() {
        // horizontal one-pixel ridge ending at (5, 4)
        let img = packed(16, 9, &[(2, 4), (3, 4), (4, 4), (5, 4)]);
        let maps = valid_maps(16, 9, 8);
        let params = DetectParams::default();
        let mut list = Minutiae::with_capacity(16).unwrap();
        StandardMinutiaeFinder
            .detect(&mut list, &img, &maps, &params)
            .unwrap();
        let endings: Vec<_> = list
            .iter()
            .filter(|m| m.kind == MinutiaKind::Ending)
            .collect();
        assert!(
            endings.iter().any(|m| m.x == 5 && m.y == 4),
            "expected an ending at the line tip, got {:?}",
            list.as_slice()
        );
        assert!(endings.iter().all(|m| m.direction == 2));
    }

    #[test]
    fn fork_is_a_bifurcation() {
        // a Y: stem from the west, two arms leaving east-up and east-down
        let img = packed(
            16,
            9,
            &[
                (2, 4),
                (3, 4),
                (4, 4),
                (5, 3),
                (6, 2),
                (5, 5),
                (6, 6),
            ],
        );
        let maps = valid_maps(16, 9, 8);
        let params = DetectParams::default();
        let mut list = Minutiae::with_capacity(16).unwrap();
        StandardMinutiaeFinder
            .detect(&mut list, &img, &maps, &params)
            .unwrap();
        assert!(
            list.iter()
                .any(|m| m.kind == MinutiaKind::Bifurcation && m.x == 4 && m.y == 4),
            "expected a bifurcation at the fork, got {:?}",
            list.as_slice()
        );
    }

    #[test]
    fn invalid_blocks_and_capacity_are_respected() {
        let img = packed(16, 9, &[(2, 4), (3, 4), (4, 4), (5, 4)]);
        let (mw, mh) = crate::maps::block_dims(16, 9, 8);
        let maps = Maps::new(mw, mh); // all directions invalid
        let params = DetectParams::default();
        let mut list = Minutiae::with_capacity(4).unwrap();
        StandardMinutiaeFinder
            .detect(&mut list, &img, &maps, &params)
            .unwrap();
        assert!(list.is_empty(), "invalid blocks must yield no minutiae");

        let maps = valid_maps(16, 9, 8);
        let mut list = Minutiae::with_capacity(1).unwrap();
        StandardMinutiaeFinder
            .detect(&mut list, &img, &maps, &params)
            .unwrap();
        assert!(list.len() <= 1);
    }
}
