use serde::Serialize;

/// Cells kept free around the art (borders and the status bar).
pub const WIDTH_MARGIN: u32 = 2;
pub const HEIGHT_MARGIN: u32 = 2;

/// Assumed when no terminal is attached.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Centering width divisor used when the column count is unknown.
const COLUMN_FALLBACK_DIVISOR: u32 = 10;

/// Upper bound on the centering width; padding is allocated per line.
pub const MAX_CENTER_WIDTH: u32 = 4096;

/// Command-line replacements for probed values.
#[derive(Clone, Copy, Debug, Default, clap::Args)]
pub struct BoundsOverrides {
    /// Maximum art width in characters
    #[arg(long)]
    pub max_width: Option<u32>,
    /// Maximum art height in lines
    #[arg(long)]
    pub max_height: Option<u32>,
    /// Column count used to center lines
    #[arg(long)]
    pub columns: Option<u32>,
}

/// What the terminal reported at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TerminalProbe {
    pub columns: Option<u16>,
    pub rows: Option<u16>,
    /// Screen width in pixels, when the terminal reports it.
    pub pixel_width: Option<u16>,
}

impl TerminalProbe {
    pub fn detect() -> Self {
        let cell_size = char_cell_from_env();
        match crossterm::terminal::window_size() {
            Ok(size) => {
                let (cols, rows) = normalize_terminal_size(size.columns, size.rows, cell_size);
                Self {
                    columns: Some(cols),
                    rows: Some(rows),
                    pixel_width: (size.width > 0).then_some(size.width),
                }
            }
            // Some platforms only answer the cell count.
            Err(_) => match crossterm::terminal::size() {
                Ok((raw_cols, raw_rows)) => {
                    let (cols, rows) = normalize_terminal_size(raw_cols, raw_rows, cell_size);
                    Self { columns: Some(cols), rows: Some(rows), pixel_width: None }
                }
                Err(_) => Self::default(),
            },
        }
    }
}

/// Display bounds and hints, computed once and passed into every conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayConfig {
    pub max_width: u32,
    pub max_height: u32,
    /// Columns of the display surface, if known.
    pub columns: Option<u32>,
    pub font_size: Option<u8>,
}

impl DisplayConfig {
    pub fn from_terminal(overrides: &BoundsOverrides) -> (Self, TerminalProbe) {
        let probe = TerminalProbe::detect();
        (Self::from_probe(&probe, overrides), probe)
    }

    pub fn from_probe(probe: &TerminalProbe, overrides: &BoundsOverrides) -> Self {
        let cols = probe.columns.filter(|c| *c > 0).unwrap_or(FALLBACK_SIZE.0) as u32;
        let rows = probe.rows.filter(|r| *r > 0).unwrap_or(FALLBACK_SIZE.1) as u32;

        let max_width = overrides
            .max_width
            .unwrap_or_else(|| cols.saturating_sub(WIDTH_MARGIN))
            .max(1);
        let max_height = overrides
            .max_height
            .unwrap_or_else(|| rows.saturating_sub(HEIGHT_MARGIN))
            .max(1);

        Self {
            max_width,
            max_height,
            columns: overrides.columns.or(probe.columns.map(u32::from)),
            font_size: probe.pixel_width.map(font_size_for_screen),
        }
    }

    /// Width that lines are centered against, at most `MAX_CENTER_WIDTH`.
    pub fn target_width(&self) -> u32 {
        let width = match self.columns {
            Some(cols) if cols > 0 => cols,
            _ => self.max_width / COLUMN_FALLBACK_DIVISOR,
        };
        width.min(MAX_CENTER_WIDTH)
    }
}

/// Font size hint for a screen of the given pixel width.
pub fn font_size_for_screen(screen_width: u16) -> u8 {
    if screen_width >= 1920 {
        5
    } else if screen_width >= 1366 {
        7
    } else {
        9
    }
}

fn char_cell_from_env() -> Option<(u16, u16)> {
    let char_width = std::env::var("CHAR_WIDTH").ok().and_then(|v| v.parse::<u16>().ok());
    let char_height = std::env::var("CHAR_HEIGHT").ok().and_then(|v| v.parse::<u16>().ok());
    char_width.zip(char_height)
}

/// Some terminals report pixels instead of cells. When the cell size is known and
/// the reported size is implausibly large, convert back to cells.
pub fn normalize_terminal_size(raw_cols: u16, raw_rows: u16, cell: Option<(u16, u16)>) -> (u16, u16) {
    if let Some((cw, ch)) = cell {
        if cw > 0 && ch > 0 && raw_cols >= cw.saturating_mul(32) && raw_rows >= ch.saturating_mul(16) {
            return (raw_cols / cw, raw_rows / ch);
        }
    }
    (raw_cols, raw_rows)
}
