//! Minutiae-detection pipeline.
//!
//! Overview
//! - Builds the per-invocation lookup tables (direction angles, DFT waves,
//!   rotated sampling grids) and a padded 6-bit working copy of the input.
//! - Generates four block maps: ridge-flow direction, low contrast, low
//!   flow, high curvature.
//! - Binarizes the image into ridges and valleys along the mapped
//!   directions, then defensively checks the output dimensions.
//! - Detects candidate minutiae on the packed binary image, prunes false
//!   ones, and annotates survivors with neighbor ridge counts.
//!
//! Modules
//! - [`params`] – configuration knobs for every stage.
//! - [`collaborators`] – trait seams and the bundled reference stages.
//! - `pipeline` – the [`RidgeDetector`] controller.
//!
//! Key ideas
//! - The stage order is fixed: each stage consumes resources built by a
//!   prefix of its predecessors, so tables are droppable the moment their
//!   consumer finishes and peak memory stays bounded.
//! - Failures are terminal and structural: the first stage error unwinds
//!   through `?`, dropping everything acquired so far in reverse order.

pub mod collaborators;
pub mod params;
mod pipeline;

pub use collaborators::Stages;
pub use params::DetectParams;
pub use pipeline::RidgeDetector;
