use image::{imageops, imageops::FilterType, RgbImage};

use super::error::ConvertError;

/// Fits `width x height` inside `max_width x max_height`, keeping the aspect ratio.
///
/// Nothing changes when the image already fits. Otherwise width is corrected first,
/// then height, each time deriving the other axis from the original aspect ratio.
/// The derived axis is truncated, so 1000x300 bounded to width 333 becomes 333x99.
/// An extreme aspect ratio can truncate an axis to zero.
pub fn scale_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }

    let aspect_ratio = width as f64 / height as f64;
    let (mut new_width, mut new_height) = (width, height);

    if new_width > max_width {
        new_width = max_width;
        new_height = (new_width as f64 / aspect_ratio) as u32;
    }

    if new_height > max_height {
        new_height = max_height;
        new_width = (new_height as f64 * aspect_ratio) as u32;
    }

    (new_width, new_height)
}

/// Resamples `image` to fit the bounds. Returns an unmodified copy when it fits.
///
/// Fails when an axis truncates to zero; such an image has no text form.
pub fn scale_image(image: &RgbImage, max_width: u32, max_height: u32) -> Result<RgbImage, ConvertError> {
    let (width, height) = image.dimensions();
    let (new_width, new_height) = scale_dimensions(width, height, max_width, max_height);

    if new_width == 0 || new_height == 0 {
        return Err(ConvertError::ScaledToNothing { width, height, max_width, max_height });
    }

    if (new_width, new_height) == (width, height) {
        return Ok(image.clone());
    }

    log::debug!("scaling {}x{} -> {}x{}", width, height, new_width, new_height);
    Ok(imageops::resize(image, new_width, new_height, FilterType::Triangle))
}
