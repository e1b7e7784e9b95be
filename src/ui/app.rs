//! Main TUI application state and logic

use crate::config::KeywordPolicy;
use crate::parser::parse::TranslationSummary;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Rows moved by PageUp / PageDown.
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Source,
        }
    }
}

/// The main application state
pub struct App {
    pub source: String,
    pub translation: String,
    pub summary: TranslationSummary,
    pub policy: KeywordPolicy,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets, clamped when rendered
    pub source_scroll: usize,
    pub output_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,
}

impl App {
    pub fn new(
        source: String,
        translation: String,
        summary: TranslationSummary,
        policy: KeywordPolicy,
    ) -> Self {
        let status_message = match summary.diagnostics.first() {
            Some(first) => format!("line {}: {}", first.location.line, first),
            None => String::from("Translated cleanly"),
        };

        App {
            source,
            translation,
            summary,
            policy,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            output_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI: source and translation side by side, status bar below
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source,
            self.policy,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_output_pane(
            frame,
            columns[1],
            &self.translation,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.summary,
            self.policy,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Output => &mut self.output_scroll,
        }
    }
}
