use std::path::Path;

use super::error::ConvertError;
use super::layout::{center_line, AsciiArt};
use super::loader::decode_image;
use super::palette::Palette;
use super::processor::AsciiProcessor;
use super::scaler::scale_image;
use crate::config::DisplayConfig;
use crate::utils::file_utils;

/// Runs the whole pipeline: decode, scale, map pixels, center lines.
///
/// Nothing is returned unless every step succeeds.
pub fn convert(bytes: &[u8], config: &DisplayConfig, palette: &Palette) -> Result<AsciiArt, ConvertError> {
    let image = decode_image(bytes)?;
    let scaled = scale_image(&image, config.max_width, config.max_height)?;
    drop(image);

    let target_width = config.target_width();
    let lines = AsciiProcessor::new(palette)
        .process_image(&scaled)
        .iter()
        .map(|line| center_line(line, target_width))
        .collect();

    log::debug!(
        "rendered {}x{} cells, centered on {} columns",
        scaled.width(),
        scaled.height(),
        target_width
    );
    Ok(AsciiArt::from_lines(lines))
}

/// Holds the startup configuration so each load is a single call.
pub struct AsciiConverter {
    config: DisplayConfig,
    palette: Palette,
}

impl AsciiConverter {
    pub fn new(config: DisplayConfig, palette: Palette) -> Self {
        Self { config, palette }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn convert_bytes(&self, bytes: &[u8]) -> Result<AsciiArt, ConvertError> {
        convert(bytes, &self.config, &self.palette)
    }

    pub fn convert_file(&self, path: &Path) -> Result<AsciiArt, ConvertError> {
        log::info!("converting {}", path.display());
        let bytes = file_utils::read_file(path)?;
        let art = self.convert_bytes(&bytes)?;
        log::info!("{}: {} lines", path.display(), art.height());
        Ok(art)
    }
}
