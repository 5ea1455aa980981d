use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::fs;
use std::path::{Path, PathBuf};

const ENTER_PATH: &str = "Enter a path...";
const CANCEL: &str = "Cancel";

/// Directory the picker opens in when none is given.
pub fn default_image_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// True for extensions the decoder recognises.
pub fn is_image_path(path: &Path) -> bool {
    path.is_file() && image::ImageFormat::from_path(path).is_ok()
}

/// Image files directly inside `dir`, sorted by path.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut images: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| is_image_path(path))
        .collect();

    images.sort();
    Ok(images)
}

/// Asks the user for an image. `None` means the choice was cancelled.
pub fn pick_image(dir: &Path) -> Result<Option<PathBuf>> {
    // An unreadable directory still leaves manual entry available
    let images = list_images(dir).unwrap_or_else(|e| {
        log::warn!("{:#}", e);
        Vec::new()
    });

    let mut items: Vec<String> = images
        .iter()
        .map(|p| p.file_name().map(|n| n.to_string_lossy().to_string()).unwrap_or_default())
        .collect();
    items.push(ENTER_PATH.to_string());
    items.push(CANCEL.to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("Load image from {}", dir.display()))
        .default(0)
        .items(&items)
        .interact_opt()?;

    match selection {
        Some(i) if i < images.len() => Ok(Some(images[i].clone())),
        Some(i) if items[i] == ENTER_PATH => {
            let typed: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Image path")
                .allow_empty(true)
                .interact_text()?;
            let typed = typed.trim();
            Ok((!typed.is_empty()).then(|| PathBuf::from(typed)))
        }
        _ => Ok(None),
    }
}
