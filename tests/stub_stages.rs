//! Controller behavior against stubbed pipeline stages.

mod common;

use common::synthetic_image::flat_gray_u8;
use ridge_quality::detector::collaborators::{Binarizer, MapGenerator};
use ridge_quality::error::DetectError;
use ridge_quality::image::GrayImageU8;
use ridge_quality::image::ImageU8;
use ridge_quality::maps::{BlockMap, Maps};
use ridge_quality::tables::{DftTables, RotGrids};
use ridge_quality::{DetectParams, RidgeDetector, Stages};

/// Binarizer that returns an image of the wrong dimensions.
struct ShrunkenBinarizer;

impl Binarizer for ShrunkenBinarizer {
    fn binarize(
        &self,
        _padded: &GrayImageU8,
        _pad: usize,
        dims: (usize, usize),
        _direction: &BlockMap,
        _grids: &RotGrids,
        _params: &DetectParams,
    ) -> Result<GrayImageU8, DetectError> {
        let (w, h) = (dims.0 - 2, dims.1 - 1);
        Ok(GrayImageU8::new(w, h, vec![255u8; w * h]))
    }
}

/// Map generator that always reports a failure.
struct FailingMapGenerator;

impl MapGenerator for FailingMapGenerator {
    fn generate(
        &self,
        _padded: &GrayImageU8,
        _pad: usize,
        _dims: (usize, usize),
        _tables: &DftTables<'_>,
        _params: &DetectParams,
    ) -> Result<Maps, DetectError> {
        Err(DetectError::stage("maps", "synthetic failure"))
    }
}

#[test]
fn mismatched_binarizer_dimensions_are_fatal() {
    let (w, h) = (64usize, 64usize);
    let buffer = flat_gray_u8(w, h, 128);
    let image = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };

    let stages = Stages {
        binarizer: Box::new(ShrunkenBinarizer),
        ..Default::default()
    };
    let detector = RidgeDetector::new(stages);
    let err = detector
        .detect(image, &DetectParams::default())
        .expect_err("a shrunken binarized image must never pass");
    match err {
        DetectError::DimensionMismatch {
            got_w,
            got_h,
            want_w,
            want_h,
        } => {
            assert_eq!((got_w, got_h), (w - 2, h - 1));
            assert_eq!((want_w, want_h), (w, h));
        }
        other => panic!("expected DimensionMismatch, got {other:?}"),
    }
}

#[test]
fn failing_collaborator_aborts_the_pipeline() {
    let (w, h) = (64usize, 64usize);
    let buffer = flat_gray_u8(w, h, 128);
    let image = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };

    let stages = Stages {
        map_generator: Box::new(FailingMapGenerator),
        ..Default::default()
    };
    let detector = RidgeDetector::new(stages);
    let err = detector
        .detect(image, &DetectParams::default())
        .expect_err("a failing map generator must abort the run");
    match err {
        DetectError::Collaborator { stage, reason } => {
            assert_eq!(stage, "maps");
            assert_eq!(reason, "synthetic failure");
        }
        other => panic!("expected Collaborator, got {other:?}"),
    }
}

#[test]
fn zero_minutiae_capacity_is_an_allocation_error() {
    let (w, h) = (64usize, 64usize);
    let buffer = flat_gray_u8(w, h, 128);
    let image = ImageU8 {
        w,
        h,
        stride: w,
        data: &buffer,
    };

    let params = DetectParams {
        max_minutiae: 0,
        ..Default::default()
    };
    let detector = RidgeDetector::default();
    let err = detector
        .detect(image, &params)
        .expect_err("zero capacity must fail allocation");
    assert!(matches!(err, DetectError::Allocation { .. }));
}
