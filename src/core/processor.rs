use image::RgbImage;

use super::palette::Palette;

// Rec. 709 weights scaled by 10_000 so luminance stays exact integer math.
// With f64 weights a white pixel sums to 254.99999999999997 and truncates to 254.
const WEIGHT_R: u32 = 2126;
const WEIGHT_G: u32 = 7152;
const WEIGHT_B: u32 = 722;
const WEIGHT_SCALE: u32 = 10_000;

/// Perceptual brightness of an RGB pixel, truncated to an integer in 0..=255.
///
/// No gamma correction is applied.
#[inline(always)]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * WEIGHT_R + g as u32 * WEIGHT_G + b as u32 * WEIGHT_B;
    (weighted / WEIGHT_SCALE) as u8
}

/// Maps a luminance value linearly onto `0..palette_len`.
///
/// Equivalent to `floor(gray / 255 * (palette_len - 1))`; 255 lands on the last index.
#[inline(always)]
pub fn bucket_index(gray: u8, palette_len: usize) -> usize {
    let last = palette_len.saturating_sub(1);
    gray as usize * last / 255
}

/// Turns an RGB image into one text line per pixel row.
pub struct AsciiProcessor<'a> {
    palette: &'a Palette,
}

impl<'a> AsciiProcessor<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }

    pub fn process_image(&self, image: &RgbImage) -> Vec<String> {
        image
            .rows()
            .map(|row| {
                row.map(|pixel| {
                    let [r, g, b] = pixel.0;
                    self.palette.char_for_luminance(luminance(r, g, b))
                })
                .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use proptest::prelude::*;

    #[test]
    fn test_luminance_primaries() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(255, 255, 255), 255);
        assert_eq!(luminance(255, 0, 0), 54);
        assert_eq!(luminance(0, 255, 0), 182);
        assert_eq!(luminance(0, 0, 255), 18);
    }

    #[test]
    fn test_luminance_of_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(luminance(v, v, v), v, "gray {}", v);
        }
    }

    #[test]
    fn test_bucket_index_extremes() {
        assert_eq!(bucket_index(0, 10), 0);
        assert_eq!(bucket_index(255, 10), 9);
        assert_eq!(bucket_index(255, 1), 0);
    }

    #[test]
    fn test_process_image_one_line_per_row() {
        let palette = Palette::classic();
        let proc = AsciiProcessor::new(&palette);
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 255, 255]));
        img.put_pixel(1, 0, Rgb([0, 0, 0]));
        img.put_pixel(2, 0, Rgb([128, 128, 128]));
        for x in 0..3 {
            img.put_pixel(x, 1, Rgb([0, 255, 0]));
        }

        let lines = proc.process_image(&img);
        assert_eq!(lines.len(), 2);
        // 128 * 9 / 255 = 4 -> '$', 182 * 9 / 255 = 6 -> '.'
        assert_eq!(lines[0], "/*$");
        assert_eq!(lines[1], "...");
    }

    proptest! {
        #[test]
        fn prop_bucket_index_in_range(gray in any::<u8>(), len in 1usize..=64) {
            let idx = bucket_index(gray, len);
            prop_assert!(idx < len);
            if gray == 0 {
                prop_assert_eq!(idx, 0);
            }
            if gray == 255 {
                prop_assert_eq!(idx, len - 1);
            }
        }

        #[test]
        fn prop_bucket_index_is_monotonic(a in any::<u8>(), b in any::<u8>()) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bucket_index(lo, 10) <= bucket_index(hi, 10));
        }
    }
}
