/// Generates a uniform flat-gray image.
pub fn flat_gray_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates vertical ridge/valley stripes of the given period.
pub fn vertical_stripes_u8(width: usize, height: usize, period: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(period >= 2 && period % 2 == 0, "period must be even and >= 2");

    let mut img = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let dark = (x / (period / 2)) % 2 == 0;
            img[y * width + x] = if dark { 40u8 } else { 210u8 };
        }
    }
    img
}
