//! TUI pane rendering modules
//!
//! - [`source`]: Source text with lexer-driven syntax highlighting
//! - [`output`]: Translated Python with diagnostic comments highlighted
//! - [`status`]: Status bar with keybindings and translation counts
//!
//! Each pane module exports a primary `render_*` function. Scrollable panes
//! take their scroll offset by `&mut` and clamp it to the content they draw.

pub mod output;
pub mod source;
pub mod status;

pub use output::render_output_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border colour reflects focus.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Rows available inside a bordered pane, at least 1.
pub(crate) fn visible_height(area: Rect) -> usize {
    area.height.saturating_sub(2).max(1) as usize
}

/// Keep `offset` within `0..=total - visible`.
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
