use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::AsciiConverter;
use crate::renderer::{TextView, ViewAction};
use crate::ui::menu;

/// Runs the viewer until the user quits.
///
/// A failed load leaves the previous art on screen and shows the error in the
/// status bar; it never ends the session.
pub fn run_viewer(converter: &AsciiConverter, initial: Option<PathBuf>, dir: &Path) -> Result<()> {
    let mut view = TextView::new(converter.config().font_size)?;

    if let Some(path) = initial {
        view.apply_load(converter.convert_file(&path));
    }

    loop {
        match view.run()? {
            ViewAction::Quit => break,
            ViewAction::Load => {
                view.suspend()?;
                let picked = menu::pick_image(dir);
                view.resume()?;

                match picked? {
                    Some(path) => view.apply_load(converter.convert_file(&path)),
                    None => log::debug!("load cancelled"),
                }
            }
        }
    }

    Ok(())
}
