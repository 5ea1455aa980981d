use super::processor::bucket_index;

/// Symbols of the classic palette, darkest index first.
///
/// The visual density of these glyphs is not monotonic. Reordering them changes
/// every rendered image, so they stay exactly as they are.
pub const CLASSIC_SYMBOLS: [char; 10] = ['*', '@', '#', '?', '$', '&', '.', ',', '\\', '/'];

/// Ordered, non-empty set of characters indexed by luminance bucket.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    symbols: Vec<char>,
}

impl Palette {
    pub fn classic() -> Self {
        Self { symbols: CLASSIC_SYMBOLS.to_vec() }
    }

    #[inline(always)]
    pub fn char_for_luminance(&self, gray: u8) -> char {
        self.symbols[bucket_index(gray, self.symbols.len())]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_order_is_verbatim() {
        let text: String = CLASSIC_SYMBOLS.iter().collect();
        assert_eq!(text, "*@#?$&.,\\/");
        let palette = Palette::classic();
        for (i, expected) in CLASSIC_SYMBOLS.iter().enumerate() {
            // Lowest gray value landing in bucket i
            let gray = ((i * 255 + 8) / 9) as u8;
            assert_eq!(palette.char_for_luminance(gray), *expected, "bucket {}", i);
        }
    }

    #[test]
    fn test_extremes_hit_first_and_last_symbol() {
        let palette = Palette::classic();
        assert_eq!(palette.char_for_luminance(0), '*');
        assert_eq!(palette.char_for_luminance(255), '/');
    }

    #[test]
    fn test_bucket_boundaries() {
        let palette = Palette::classic();
        // 28 * 9 / 255 = 0.98, 29 * 9 / 255 = 1.02
        assert_eq!(palette.char_for_luminance(28), '*');
        assert_eq!(palette.char_for_luminance(29), '@');
        assert_eq!(palette.char_for_luminance(254), '\\');
    }
}
