//! False-minutiae removal.

use super::Minutiae;
use crate::detector::collaborators::MinutiaePruner;
use crate::detector::DetectParams;
use crate::error::DetectError;
use crate::image::GrayImageU8;
use crate::maps::Maps;
use log::debug;

/// Reference pruner used by the default pipeline.
///
/// Drops candidates that are artifacts of the binarization rather than real
/// ridge features: points hugging the image border, points in low-contrast
/// blocks, points below the reliability floor, and points crowding a
/// retained earlier minutia.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPruner;

impl MinutiaePruner for StandardPruner {
    fn remove_false(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        maps: &Maps,
        params: &DetectParams,
    ) -> Result<(), DetectError> {
        let before = minutiae.len();
        let width = packed.width();
        let height = packed.height();
        let border = params.prune_border;
        let min_dist_sq = params.prune_min_distance * params.prune_min_distance;

        let mut kept: Vec<(usize, usize)> = Vec::with_capacity(minutiae.len());
        minutiae.retain(|m| {
            if m.x < border || m.y < border || m.x + border >= width || m.y + border >= height {
                return false;
            }
            if maps
                .low_contrast
                .get(m.x / params.block_size, m.y / params.block_size)
                != 0
            {
                return false;
            }
            if m.reliability < params.min_reliability {
                return false;
            }
            let crowded = kept.iter().any(|&(kx, ky)| {
                let dx = kx.abs_diff(m.x);
                let dy = ky.abs_diff(m.y);
                dx * dx + dy * dy < min_dist_sq
            });
            if crowded {
                return false;
            }
            kept.push((m.x, m.y));
            true
        });

        debug!("pruned {} of {} candidate minutiae", before - minutiae.len(), before);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minutiae::{Minutia, MinutiaKind};

    fn minutia(x: usize, y: usize, reliability: f64) -> Minutia {
        Minutia {
            x,
            y,
            kind: MinutiaKind::Ending,
            direction: 0,
            reliability,
            neighbors: Vec::new(),
            ridge_counts: Vec::new(),
        }
    }

    #[test]
    fn border_low_contrast_and_weak_candidates_are_dropped() {
        let params = DetectParams::default();
        let (w, h) = (64usize, 64usize);
        let packed = GrayImageU8::new(w, h, vec![0u8; w * h]);
        let (mw, mh) = crate::maps::block_dims(w, h, params.block_size);
        let mut maps = Maps::new(mw, mh);
        // block (4, 4) is low contrast
        maps.low_contrast.set(4, 4, 1);

        let mut list = Minutiae::with_capacity(16).unwrap();
        list.push(minutia(2, 30, 1.0)); // border
        list.push(minutia(35, 35, 1.0)); // inside low-contrast block
        list.push(minutia(20, 20, 0.05)); // unreliable
        list.push(minutia(50, 18, 1.0)); // good

        StandardPruner
            .remove_false(&mut list, &packed, &maps, &params)
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!((list.get(0).x, list.get(0).y), (50, 18));
    }

    #[test]
    fn crowded_pairs_keep_only_the_first() {
        let params = DetectParams::default();
        let (w, h) = (64usize, 64usize);
        let packed = GrayImageU8::new(w, h, vec![0u8; w * h]);
        let (mw, mh) = crate::maps::block_dims(w, h, params.block_size);
        let maps = Maps::new(mw, mh);

        let mut list = Minutiae::with_capacity(16).unwrap();
        list.push(minutia(30, 30, 1.0));
        list.push(minutia(31, 30, 1.0)); // one pixel away
        list.push(minutia(30 + params.prune_min_distance, 30, 1.0)); // far enough

        StandardPruner
            .remove_false(&mut list, &packed, &maps, &params)
            .unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!((list.get(0).x, list.get(0).y), (30, 30));
    }
}
