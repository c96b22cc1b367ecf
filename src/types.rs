use crate::diagnostics::TimingBreakdown;
use crate::image::GrayImageU8;
use crate::maps::Maps;
use crate::minutiae::Minutiae;

/// Successful output of one detection run.
///
/// Ownership of every field transfers to the caller; nothing in the
/// detector retains a reference to it.
#[derive(Clone, Debug)]
pub struct Detection {
    /// Binarized ridge/valley image in the 8-bit encoding
    /// (ridge = black 0, valley = white 255), same dimensions as the input.
    pub binarized: GrayImageU8,
    /// The four block-resolution maps.
    pub maps: Maps,
    /// Pruned, annotated minutiae.
    pub minutiae: Minutiae,
    /// Per-stage timing side channel.
    pub timing: TimingBreakdown,
}
