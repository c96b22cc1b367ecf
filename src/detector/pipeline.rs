use super::collaborators::Stages;
use super::DetectParams;
use crate::diagnostics::TimingBreakdown;
use crate::error::DetectError;
use crate::image::{ops, ImageU8};
use crate::minutiae::Minutiae;
use crate::tables::{max_padding, DftTables, DftWaves, DirToRad, RotGrids};
use crate::types::Detection;
use log::debug;
use std::time::Instant;

/// Minutiae-detection pipeline controller.
///
/// One `detect` call drives a fixed, non-reorderable sequence of stages:
/// lookup-table construction, padding, 6-bit quantization, map generation,
/// directional binarization, a defensive dimension check, minutiae
/// detection, false-minutiae removal and neighbor ridge counting. Each
/// stage's resources depend only on a prefix of the inputs, so tables are
/// built right before their consumers and dropped right after — scope exit
/// releases them in reverse acquisition order, on success and on every
/// failure path alike.
///
/// The first failing stage aborts the whole run; no partial results escape.
pub struct RidgeDetector {
    stages: Stages,
}

impl Default for RidgeDetector {
    fn default() -> Self {
        Self::new(Stages::default())
    }
}

impl RidgeDetector {
    /// Create a detector from one implementation of each pipeline stage.
    pub fn new(stages: Stages) -> Self {
        Self { stages }
    }

    /// Run the full pipeline on a grayscale image.
    ///
    /// On success the caller receives the binarized ridge/valley image (in
    /// the 8-bit BLACK/WHITE encoding), the four block maps and the
    /// annotated minutiae list, together with a per-stage timing trace.
    pub fn detect(
        &self,
        image: ImageU8<'_>,
        params: &DetectParams,
    ) -> Result<Detection, DetectError> {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();

        // Maximum padding any downstream sampler needs.
        let max_pad = max_padding(
            params.window_size,
            params.window_offset,
            params.dirbin_grid_w,
            params.dirbin_grid_h,
        );
        let padded_pitch = image.w + 2 * max_pad;

        // The DFT tables live exactly as long as map generation needs them.
        let stage_start = Instant::now();
        let (padded, maps) = {
            let dir_to_rad = DirToRad::new(params.num_directions);
            let dft_waves = DftWaves::new(params.num_dft_waves, params.window_size);
            let dft_grids = RotGrids::relative_to_origin(
                params.start_angle,
                params.num_directions,
                params.window_size,
                params.window_size,
                padded_pitch,
            );

            let mut padded = if max_pad > 0 {
                self.stages.padder.pad(image.clone(), max_pad, params.pad_value)?
            } else {
                // padding is unnecessary; a plain working copy suffices
                ops::pad_image(image.clone(), 0, params.pad_value)
            };

            // Scale the working copy to the 6-bit domain the DFT analysis
            // expects; accumulated power magnitudes stay comfortably inside
            // f64 that way.
            ops::quantize_to_6bit(padded.data_mut());
            debug!("initialization and padding done (max_pad={max_pad})");

            let tables = DftTables {
                dir_to_rad: &dir_to_rad,
                waves: &dft_waves,
                grids: &dft_grids,
            };
            let maps = self.stages.map_generator.generate(
                &padded,
                max_pad,
                (image.w, image.h),
                &tables,
                params,
            )?;
            (padded, maps)
            // dft_grids, dft_waves, dir_to_rad dropped here: single-use
        };
        timing.push("maps", elapsed_ms(stage_start));
        debug!("maps done");

        // The binarization grid table is scoped the same way.
        let stage_start = Instant::now();
        let mut binarized = {
            let dirbin_grids = RotGrids::relative_to_center(
                params.start_angle,
                params.num_directions,
                params.dirbin_grid_w,
                params.dirbin_grid_h,
                padded_pitch,
            );
            self.stages.binarizer.binarize(
                &padded,
                max_pad,
                (image.w, image.h),
                &maps.direction,
                &dirbin_grids,
                params,
            )?
        };
        // The padded working copy has no further consumers.
        drop(padded);

        // Defensive: a binarized image of different dimensions would poison
        // every pixel-indexed stage below.
        if binarized.width() != image.w || binarized.height() != image.h {
            return Err(DetectError::DimensionMismatch {
                got_w: binarized.width(),
                got_h: binarized.height(),
                want_w: image.w,
                want_h: image.h,
            });
        }
        timing.push("binarization", elapsed_ms(stage_start));
        debug!("binarization done");

        // Detection algorithms work on the packed {0,1} encoding.
        let stage_start = Instant::now();
        ops::gray_to_packed(binarized.data_mut());

        let mut minutiae = Minutiae::with_capacity(params.max_minutiae)?;
        self.stages
            .finder
            .detect(&mut minutiae, &binarized, &maps, params)?;
        timing.push("detection", elapsed_ms(stage_start));
        debug!("minutia detection done");

        let stage_start = Instant::now();
        self.stages
            .pruner
            .remove_false(&mut minutiae, &binarized, &maps, params)?;
        timing.push("removal", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        self.stages
            .ridge_counter
            .count_ridges(&mut minutiae, &binarized, params)?;
        timing.push("ridge-counts", elapsed_ms(stage_start));
        debug!("neighbor ridge counting done");

        // Back to the 8-bit BLACK/WHITE encoding for the caller.
        ops::packed_to_gray(binarized.data_mut());

        timing.total_ms = elapsed_ms(total_start);
        Ok(Detection {
            binarized,
            maps,
            minutiae,
            timing,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
