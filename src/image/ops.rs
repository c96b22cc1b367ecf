//! Pixel-level utilities used by the detection pipeline.
//!
//! - `pad_image`: padded working copy with a uniform border value.
//! - `quantize_to_6bit`: in-place 8-bit → 6-bit domain reduction.
//! - `gray_to_packed` / `packed_to_gray`: the two one-directional encoding
//!   conversions of the binarized image.

use super::io::GrayImageU8;
use super::ImageU8;

/// Ridge sample in the 8-bit {0,255} encoding.
pub const BLACK_PIXEL: u8 = 0;
/// Valley sample in the 8-bit {0,255} encoding.
pub const WHITE_PIXEL: u8 = 255;

/// Copy `image` into a buffer grown by `pad` pixels on every side, border
/// filled with `pad_value`.
pub fn pad_image(image: ImageU8, pad: usize, pad_value: u8) -> GrayImageU8 {
    let padded_w = image.w + 2 * pad;
    let padded_h = image.h + 2 * pad;
    let mut data = vec![pad_value; padded_w * padded_h];
    for y in 0..image.h {
        let src = image.row(y);
        let dst_start = (y + pad) * padded_w + pad;
        data[dst_start..dst_start + image.w].copy_from_slice(src);
    }
    GrayImageU8::new(padded_w, padded_h, data)
}

/// Reduce 8-bit samples [0,255] to the 6-bit domain [0,63] in place.
///
/// The reduction is monotone and irreversible. A buffer whose samples are
/// already all within the 6-bit domain is left untouched, so the operation
/// is idempotent.
pub fn quantize_to_6bit(data: &mut [u8]) {
    if data.iter().all(|&v| v <= 63) {
        return;
    }
    for v in data.iter_mut() {
        *v >>= 2;
    }
}

/// Convert a {0,255} ridge/valley buffer to the packed {0,1} encoding
/// (ridge = 1, valley = 0) used by the detection algorithms.
pub fn gray_to_packed(data: &mut [u8]) {
    threshold_encode(data, 1, 1, 0);
}

/// Convert a packed {0,1} buffer back to the 8-bit {0,255} BLACK/WHITE
/// encoding (ridge = black 0, valley = white 255).
pub fn packed_to_gray(data: &mut [u8]) {
    threshold_encode(data, 1, WHITE_PIXEL, BLACK_PIXEL);
}

fn threshold_encode(data: &mut [u8], thresh: u8, below: u8, at_or_above: u8) {
    for v in data.iter_mut() {
        *v = if *v >= thresh { at_or_above } else { below };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_preserves_interior_and_fills_border() {
        let data: Vec<u8> = (0..12u8).collect();
        let img = ImageU8 {
            w: 4,
            h: 3,
            stride: 4,
            data: &data,
        };
        let padded = pad_image(img, 2, 128);
        assert_eq!(padded.width(), 8);
        assert_eq!(padded.height(), 7);
        assert_eq!(padded.data()[0], 128);
        // top-left interior pixel
        assert_eq!(padded.data()[2 * 8 + 2], 0);
        // bottom-right interior pixel
        assert_eq!(padded.data()[4 * 8 + 5], 11);
    }

    #[test]
    fn zero_pad_copies_unchanged() {
        let data = vec![9u8; 6];
        let img = ImageU8 {
            w: 3,
            h: 2,
            stride: 3,
            data: &data,
        };
        let padded = pad_image(img, 0, 128);
        assert_eq!(padded.data(), &data[..]);
    }

    #[test]
    fn quantization_is_monotone_and_idempotent() {
        let mut buf: Vec<u8> = vec![0, 3, 64, 128, 255];
        quantize_to_6bit(&mut buf);
        assert_eq!(buf, vec![0, 0, 16, 32, 63]);
        let before = buf.clone();
        quantize_to_6bit(&mut buf);
        assert_eq!(buf, before, "re-quantizing a 6-bit buffer must be a no-op");
    }

    #[test]
    fn packing_follows_ridge_one_valley_zero() {
        let mut buf = vec![BLACK_PIXEL, WHITE_PIXEL, BLACK_PIXEL];
        gray_to_packed(&mut buf);
        assert_eq!(buf, vec![1, 0, 1]);
        packed_to_gray(&mut buf);
        assert_eq!(buf, vec![BLACK_PIXEL, WHITE_PIXEL, BLACK_PIXEL]);
    }
}
