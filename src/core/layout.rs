use std::fmt;

/// Left-pads `line` so it sits roughly in the middle of `total_width` columns.
///
/// Only the left side is padded. Lines that are not shorter than the width are
/// returned unchanged.
pub fn center_line(line: &str, total_width: u32) -> String {
    let len = line.chars().count() as u64;
    let total = total_width as u64;
    if len >= total {
        return line.to_string();
    }

    let padding = ((total - len) / 2) as usize;
    let mut out = String::with_capacity(padding + line.len());
    out.extend(std::iter::repeat(' ').take(padding));
    out.push_str(line);
    out
}

/// Rendered result of one conversion: one line per image row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArt {
    lines: Vec<String>,
}

impl AsciiArt {
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in characters, padding included.
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_line_unchanged() {
        assert_eq!(center_line("abcdef", 6), "abcdef");
        assert_eq!(center_line("abcdef", 3), "abcdef");
        assert_eq!(center_line("abc", 0), "abc");
    }

    #[test]
    fn test_short_line_gets_floor_half_padding() {
        assert_eq!(center_line("ab", 6), "  ab");
        assert_eq!(center_line("ab", 7), "  ab");
        assert_eq!(center_line("", 5), "  ");
    }

    #[test]
    fn test_one_short_is_unchanged() {
        assert_eq!(center_line("abc", 4), "abc");
    }

    #[test]
    fn test_display_terminates_every_line() {
        let art = AsciiArt::from_lines(vec!["*@".into(), " /".into()]);
        assert_eq!(art.to_string(), "*@\n /\n");
        assert_eq!(art.width(), 2);
        assert_eq!(art.height(), 2);
    }

    #[test]
    fn test_empty_art() {
        let art = AsciiArt::default();
        assert!(art.is_empty());
        assert_eq!(art.width(), 0);
        assert_eq!(art.to_string(), "");
    }
}
