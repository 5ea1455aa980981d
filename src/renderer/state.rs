use super::viewport::Viewport;
use crate::core::{AsciiArt, ConvertError};

pub const KEY_HINTS: &str = "[o] load image  [q] quit  arrows/PgUp/PgDn scroll";

/// Everything the text view shows, independent of the terminal.
#[derive(Debug, Default)]
pub struct ViewState {
    art: AsciiArt,
    pub viewport: Viewport,
    status: Option<String>,
    font_hint: Option<u8>,
}

impl ViewState {
    /// `font_hint` is the terminal font size suited to the screen, if known.
    pub fn new(font_hint: Option<u8>) -> Self {
        Self { font_hint, ..Self::default() }
    }

    pub fn art(&self) -> &AsciiArt {
        &self.art
    }

    /// Replaces the displayed art and scrolls back to the top. The previous art is dropped.
    pub fn set_art(&mut self, art: AsciiArt) {
        self.viewport.set_content(art.width(), art.height());
        self.art = art;
        self.status = None;
    }

    /// Applies the outcome of one load. A failure keeps the current art.
    pub fn apply_load(&mut self, result: Result<AsciiArt, ConvertError>) {
        match result {
            Ok(art) => self.set_art(art),
            Err(e) => {
                log::error!("{}", e);
                self.status = Some(e.user_message());
            }
        }
    }

    /// Text of the status bar, before fitting it to the screen width.
    pub fn status_line(&self) -> String {
        if let Some(message) = &self.status {
            return message.clone();
        }

        let mut line = KEY_HINTS.to_string();
        if !self.art.is_empty() {
            let rows = self.viewport.visible_rows();
            line.push_str(&format!("  lines {}-{}/{}", rows.start + 1, rows.end, self.art.height()));
        }
        if let Some(size) = self.font_hint {
            line.push_str(&format!("  best at font size {}", size));
        }
        line
    }
}
