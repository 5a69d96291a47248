//! Interactive terminal window for the path chart.

use crate::error::PlotError;
use crate::screens;
use crate::visualisation::PathChartData;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::Paragraph,
};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::debug;

/// Full-screen chart viewer.
///
/// The terminal is switched to raw mode and the alternate screen on
/// construction and restored on drop.
pub struct PathChartApp {
    /// Exit flag
    should_quit: bool,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl PathChartApp {
    /// Set up the terminal.
    pub fn new() -> Result<Self, PlotError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        restore_on_error(execute!(stdout, EnterAlternateScreen), &mut io::stdout())?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = restore_on_error(Terminal::new(backend), &mut io::stdout())?;

        Ok(Self {
            should_quit: false,
            terminal,
        })
    }

    /// Redraw `data` until `q` or `Esc` is pressed.
    pub fn run(&mut self, data: &PathChartData) -> Result<(), PlotError> {
        while !self.should_quit {
            self.terminal.draw(|frame| Self::draw(frame, data))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if is_quit_key(key) {
            self.should_quit = true;
        }
    }

    fn draw(frame: &mut Frame, data: &PathChartData) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.size());

        screens::draw_path_chart(frame, chunks[0], data);

        let footer = Paragraph::new(" q/Esc: Quit ").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, chunks[1]);
    }
}

impl Drop for PathChartApp {
    fn drop(&mut self) {
        leave_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leave raw mode and the alternate screen, ignoring failures.
fn leave_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen);
}

/// Restores the terminal before handing back a setup error, since no
/// `PathChartApp` exists yet to do it on drop.
fn restore_on_error<T, W: Write>(result: io::Result<T>, out: &mut W) -> Result<T, PlotError> {
    result.map_err(|err| {
        leave_terminal(out);
        err.into()
    })
}

fn is_quit_key(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Esc)
}

/// Open the chart viewer and block until the user quits.
pub fn show(data: &PathChartData) -> Result<(), PlotError> {
    debug!(paths = data.displayed_paths(), "Opening path chart");
    let mut app = PathChartApp::new()?;
    app.run(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert!(is_quit_key(KeyCode::Char('q')));
        assert!(is_quit_key(KeyCode::Esc));
        assert!(!is_quit_key(KeyCode::Char('Q')));
        assert!(!is_quit_key(KeyCode::Enter));
    }

    #[test]
    fn test_setup_error_leaves_alternate_screen() {
        let mut out = Vec::new();
        let err = io::Error::new(io::ErrorKind::Other, "backend unavailable");

        let result: Result<(), PlotError> = restore_on_error(Err(err), &mut out);

        assert!(matches!(result, Err(PlotError::Terminal(_))));
        assert!(String::from_utf8_lossy(&out).contains("\x1b[?1049l"));
    }

    #[test]
    fn test_setup_success_writes_nothing() {
        let mut out = Vec::new();
        let value = restore_on_error(Ok(7), &mut out).unwrap();

        assert_eq!(value, 7);
        assert!(out.is_empty());
    }
}
