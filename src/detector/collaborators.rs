//! Trait seams for the pipeline stages.
//!
//! Every mid-level sub-algorithm sits behind a trait so callers can swap or
//! stub a single stage without touching the controller. [`Stages`] bundles
//! one implementation of each; its `Default` wires up the reference
//! implementations shipped with this crate.

use super::DetectParams;
use crate::binarize::StandardBinarizer;
use crate::error::DetectError;
use crate::image::ops;
use crate::image::{GrayImageU8, ImageU8};
use crate::maps::{BlockMap, Maps, StandardMapGenerator};
use crate::minutiae::{
    Minutiae, StandardMinutiaeFinder, StandardPruner, StandardRidgeCounter,
};
use crate::tables::{DftTables, RotGrids};

/// Produces the padded working copy of the input image.
pub trait Padder: Send + Sync {
    fn pad(
        &self,
        image: ImageU8<'_>,
        max_pad: usize,
        pad_value: u8,
    ) -> Result<GrayImageU8, DetectError>;
}

/// Generates the four block maps from the padded 6-bit image.
pub trait MapGenerator: Send + Sync {
    fn generate(
        &self,
        padded: &GrayImageU8,
        pad: usize,
        dims: (usize, usize),
        tables: &DftTables<'_>,
        params: &DetectParams,
    ) -> Result<Maps, DetectError>;
}

/// Binarizes the padded image into a {0,255} ridge/valley image of the
/// original dimensions, guided by the direction map.
pub trait Binarizer: Send + Sync {
    fn binarize(
        &self,
        padded: &GrayImageU8,
        pad: usize,
        dims: (usize, usize),
        direction: &BlockMap,
        grids: &RotGrids,
        params: &DetectParams,
    ) -> Result<GrayImageU8, DetectError>;
}

/// Appends candidate minutiae found in the packed binary image.
pub trait MinutiaeFinder: Send + Sync {
    fn detect(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        maps: &Maps,
        params: &DetectParams,
    ) -> Result<(), DetectError>;
}

/// Filters false candidates out of the minutiae list in place.
pub trait MinutiaePruner: Send + Sync {
    fn remove_false(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        maps: &Maps,
        params: &DetectParams,
    ) -> Result<(), DetectError>;
}

/// Annotates minutiae with neighbor references and ridge counts.
pub trait RidgeCounter: Send + Sync {
    fn count_ridges(
        &self,
        minutiae: &mut Minutiae,
        packed: &GrayImageU8,
        params: &DetectParams,
    ) -> Result<(), DetectError>;
}

/// Plain border padder delegating to the image utilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardPadder;

impl Padder for StandardPadder {
    fn pad(
        &self,
        image: ImageU8<'_>,
        max_pad: usize,
        pad_value: u8,
    ) -> Result<GrayImageU8, DetectError> {
        Ok(ops::pad_image(image, max_pad, pad_value))
    }
}

/// One implementation of every pipeline stage.
pub struct Stages {
    pub padder: Box<dyn Padder>,
    pub map_generator: Box<dyn MapGenerator>,
    pub binarizer: Box<dyn Binarizer>,
    pub finder: Box<dyn MinutiaeFinder>,
    pub pruner: Box<dyn MinutiaePruner>,
    pub ridge_counter: Box<dyn RidgeCounter>,
}

impl Default for Stages {
    fn default() -> Self {
        Self {
            padder: Box::new(StandardPadder),
            map_generator: Box::new(StandardMapGenerator),
            binarizer: Box::new(StandardBinarizer),
            finder: Box::new(StandardMinutiaeFinder),
            pruner: Box::new(StandardPruner),
            ridge_counter: Box::new(StandardRidgeCounter),
        }
    }
}
