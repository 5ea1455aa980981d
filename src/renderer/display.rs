use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    style::{Attribute, Print, SetAttribute},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand, QueueableCommand,
};
use std::io::{Stdout, Write};

use super::state::ViewState;
use crate::core::{AsciiArt, ConvertError};

/// What the user asked the view to do when `run` returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewAction {
    Load,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Rows(isize),
    Cols(isize),
    PageUp,
    PageDown,
    Top,
    Bottom,
    Action(ViewAction),
}

fn key_command(code: KeyCode) -> Option<Command> {
    let cmd = match code {
        KeyCode::Up | KeyCode::Char('k') => Command::Rows(-1),
        KeyCode::Down | KeyCode::Char('j') => Command::Rows(1),
        KeyCode::Left | KeyCode::Char('h') => Command::Cols(-1),
        KeyCode::Right | KeyCode::Char('l') => Command::Cols(1),
        KeyCode::PageUp => Command::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Command::PageDown,
        KeyCode::Home => Command::Top,
        KeyCode::End => Command::Bottom,
        KeyCode::Char('o') => Command::Action(ViewAction::Load),
        KeyCode::Char('q') | KeyCode::Esc => Command::Action(ViewAction::Quit),
        _ => return None,
    };
    Some(cmd)
}

/// Full-screen scrollable text area with a one-line status bar.
pub struct TextView {
    stdout: Stdout,
    state: ViewState,
    active: bool,
}

impl TextView {
    /// `font_hint` is shown in the status bar when known.
    pub fn new(font_hint: Option<u8>) -> Result<Self> {
        let mut view = Self {
            stdout: std::io::stdout(),
            state: ViewState::new(font_hint),
            active: false,
        };
        view.enter()?;
        Ok(view)
    }

    fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.execute(EnterAlternateScreen)?;
        self.stdout.execute(cursor::Hide)?;
        // Disable line wrapping (DECAWM); long lines scroll horizontally instead
        self.stdout.execute(Print("\x1b[?7l"))?;
        self.active = true;
        self.sync_size();
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        self.active = false;
        self.stdout.execute(Print("\x1b[?7h"))?;
        self.stdout.execute(cursor::Show)?;
        self.stdout.execute(LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Hands the terminal back, e.g. while the file picker runs.
    pub fn suspend(&mut self) -> Result<()> {
        if self.active {
            self.leave()?;
        }
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if !self.active {
            self.enter()?;
        }
        Ok(())
    }

    fn sync_size(&mut self) {
        let (cols, rows) = terminal::size().unwrap_or((80, 24));
        self.resize(cols, rows);
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        // Last row belongs to the status bar
        self.state.viewport.resize_view(cols as usize, rows.saturating_sub(1) as usize);
    }

    /// Shows new art, or the error message while keeping the current art.
    pub fn apply_load(&mut self, result: Result<AsciiArt, ConvertError>) {
        self.state.apply_load(result);
    }

    /// Blocks on key events until the user loads or quits.
    pub fn run(&mut self) -> Result<ViewAction> {
        loop {
            self.draw()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key_command(key.code) {
                    Some(Command::Rows(n)) => self.state.viewport.scroll_rows(n),
                    Some(Command::Cols(n)) => self.state.viewport.scroll_cols(n),
                    Some(Command::PageUp) => self.state.viewport.page_up(),
                    Some(Command::PageDown) => self.state.viewport.page_down(),
                    Some(Command::Top) => self.state.viewport.top(),
                    Some(Command::Bottom) => self.state.viewport.bottom(),
                    Some(Command::Action(action)) => return Ok(action),
                    None => {}
                },
                Event::Resize(cols, rows) => self.resize(cols, rows),
                _ => {}
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let (width, height) = self.state.viewport.view_size();
        let rows = self.state.viewport.visible_rows();
        let col = self.state.viewport.col;

        for y in 0..height {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            let index = rows.start + y;
            if rows.contains(&index) {
                let visible: String = self.state.art().lines()[index].chars().skip(col).take(width).collect();
                self.stdout.queue(Print(visible))?;
            }
            self.stdout.queue(Clear(ClearType::UntilNewLine))?;
        }

        let status = self.state.status_line();
        let bar: String = format!("{:<width$}", status, width = width).chars().take(width).collect();

        self.stdout.queue(cursor::MoveTo(0, height as u16))?;
        self.stdout.queue(SetAttribute(Attribute::Reverse))?;
        self.stdout.queue(Print(bar))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TextView {
    fn drop(&mut self) {
        if self.active {
            let _ = self.leave();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keys() {
        assert_eq!(key_command(KeyCode::Down), Some(Command::Rows(1)));
        assert_eq!(key_command(KeyCode::Char('k')), Some(Command::Rows(-1)));
        assert_eq!(key_command(KeyCode::Left), Some(Command::Cols(-1)));
        assert_eq!(key_command(KeyCode::Char(' ')), Some(Command::PageDown));
        assert_eq!(key_command(KeyCode::End), Some(Command::Bottom));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(key_command(KeyCode::Char('o')), Some(Command::Action(ViewAction::Load)));
        assert_eq!(key_command(KeyCode::Esc), Some(Command::Action(ViewAction::Quit)));
        assert_eq!(key_command(KeyCode::Char('x')), None);
    }
}
