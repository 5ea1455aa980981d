use image::{DynamicImage, Rgb, RgbImage};

use super::error::ConvertError;

/// Decodes an encoded image into RGB.
///
/// Translucent pixels are composited onto black, the same result as drawing the
/// image onto a freshly allocated RGB canvas.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage, ConvertError> {
    let decoded = image::load_from_memory(bytes)?;
    let (width, height) = (decoded.width(), decoded.height());
    if width == 0 || height == 0 {
        return Err(ConvertError::EmptyImage { width, height });
    }

    log::debug!("decoded {}x{} {:?}", width, height, decoded.color());
    Ok(flatten_on_black(&decoded))
}

fn flatten_on_black(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let [r, g, b, a] = rgba.get_pixel(x, y).0;
        let premultiply = |c: u8| (c as u16 * a as u16 / 255) as u8;
        Rgb([premultiply(r), premultiply(g), premultiply(b)])
    })
}
