//! Feature vector bridging detection output to the classifier.
//!
//! Eleven statistics summarize one detection: how much of the image is
//! usable foreground, how many minutiae survived pruning at increasing
//! reliability levels, and how the foreground distributes over the quality
//! zones. The trained network expects these z-normalized with the
//! statistics shipped alongside its weights.

use crate::maps::BlockMap;
use crate::types::Detection;

/// Length of the classifier feature vector.
pub const NUM_FEATURES: usize = 11;

/// Reliability levels for the minutiae-count features.
const RELIABILITY_LEVELS: [f64; 5] = [0.5, 0.6, 0.75, 0.8, 0.9];

/// Build the raw (un-normalized) feature vector from a detection and its
/// composite quality map.
pub fn nfiq_features(detection: &Detection, quality: &BlockMap) -> [f64; NUM_FEATURES] {
    let mut features = [0.0f64; NUM_FEATURES];

    let cells = quality.as_slice();
    let foreground = cells.iter().filter(|&&q| q > 0).count();
    features[0] = foreground as f64;
    features[1] = detection.minutiae.len() as f64;

    for (i, &level) in RELIABILITY_LEVELS.iter().enumerate() {
        features[2 + i] = detection
            .minutiae
            .iter()
            .filter(|m| m.reliability > level)
            .count() as f64;
    }

    // fraction of the foreground in each quality zone 1..=4
    if foreground > 0 {
        for zone in 1..=4usize {
            let count = cells.iter().filter(|&&q| q == zone as i32).count();
            features[6 + zone] = count as f64 / foreground as f64;
        }
    }
    features
}

/// Z-normalize `features` in place with per-entry mean and standard
/// deviation. Entries beyond the shorter statistics slice, or with a
/// non-positive deviation, stay raw.
pub fn znorm(features: &mut [f64], mean: &[f64], stddev: &[f64]) {
    for ((f, &m), &s) in features.iter_mut().zip(mean).zip(stddev) {
        if s > 0.0 {
            *f = (*f - m) / s;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::TimingBreakdown;
    use crate::image::GrayImageU8;
    use crate::maps::Maps;
    use crate::minutiae::{Minutia, MinutiaKind, Minutiae};

    fn detection_with_reliabilities(rels: &[f64]) -> Detection {
        let mut minutiae = Minutiae::with_capacity(16).unwrap();
        for (i, &r) in rels.iter().enumerate() {
            minutiae.push(Minutia {
                x: 10 + i,
                y: 10,
                kind: MinutiaKind::Ending,
                direction: 0,
                reliability: r,
                neighbors: Vec::new(),
                ridge_counts: Vec::new(),
            });
        }
        Detection {
            binarized: GrayImageU8::new(4, 4, vec![255; 16]),
            maps: Maps::new(4, 4),
            minutiae,
            timing: TimingBreakdown::default(),
        }
    }

    #[test]
    fn counts_and_zone_fractions() {
        let detection = detection_with_reliabilities(&[0.95, 0.7, 0.55, 0.2]);
        let mut quality = BlockMap::new(4, 4, 0);
        // 8 foreground blocks: 4 in zone 1, 2 in zone 3, 2 in zone 4
        for i in 0..4 {
            quality.set(i, 0, 1);
        }
        quality.set(0, 1, 3);
        quality.set(1, 1, 3);
        quality.set(2, 1, 4);
        quality.set(3, 1, 4);

        let f = nfiq_features(&detection, &quality);
        assert_eq!(f[0], 8.0);
        assert_eq!(f[1], 4.0);
        assert_eq!(f[2], 3.0, "reliability > 0.5");
        assert_eq!(f[3], 2.0, "reliability > 0.6");
        assert_eq!(f[4], 1.0, "reliability > 0.75");
        assert_eq!(f[5], 1.0, "reliability > 0.8");
        assert_eq!(f[6], 1.0, "reliability > 0.9");
        assert_eq!(f[7], 0.5, "zone 1 share");
        assert_eq!(f[8], 0.0, "zone 2 share");
        assert_eq!(f[9], 0.25, "zone 3 share");
        assert_eq!(f[10], 0.25, "zone 4 share");
    }

    #[test]
    fn empty_quality_map_zeroes_the_zone_features() {
        let detection = detection_with_reliabilities(&[]);
        let quality = BlockMap::new(4, 4, 0);
        let f = nfiq_features(&detection, &quality);
        assert!(f.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn znorm_applies_where_deviation_is_positive() {
        let mut f = [4.0, 10.0, 7.0];
        znorm(&mut f, &[2.0, 10.0, 1.0], &[2.0, 5.0, 0.0]);
        assert_eq!(f, [1.0, 0.0, 7.0]);
    }
}
