//! Translated output pane rendering

use super::{clamp_scroll, pane_block, visible_height};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const COMMENT_SEPARATOR: &str = "  # ";

/// Style a Python line: code in the foreground colour, trailing comments
/// dimmed, and warnings highlighted.
pub fn style_output_line(line: &str) -> Line<'static> {
    if line.starts_with('#') {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    let (code, comments) = match line.find(COMMENT_SEPARATOR) {
        Some(pos) => line.split_at(pos),
        None => (line, ""),
    };

    let mut spans = vec![Span::styled(
        code.to_string(),
        Style::default().fg(DEFAULT_THEME.fg),
    )];
    if !comments.is_empty() {
        let style = if comments.contains("warning:") {
            Style::default()
                .fg(DEFAULT_THEME.warning)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        spans.push(Span::styled(comments.to_string(), style));
    }

    Line::from(spans)
}

/// Render the translation pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    translation: &str,
    is_focused: bool,
    scroll: &mut usize,
) {
    let lines: Vec<&str> = translation.lines().collect();
    let visible = visible_height(area);
    clamp_scroll(scroll, lines.len(), visible);

    let block = pane_block("Python", is_focused);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .skip(*scroll)
        .take(visible)
        .map(|line| style_output_line(line))
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_comment_is_highlighted() {
        let line = style_output_line("x = 5  # warning: variable 'x' is undeclared");
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "x = 5");
        assert_eq!(line.spans[1].style.fg, Some(DEFAULT_THEME.warning));
    }

    #[test]
    fn test_plain_line_is_single_span() {
        let line = style_output_line("print(x)");
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.fg));
    }

    #[test]
    fn test_header_is_comment() {
        let line = style_output_line("# Generated by transpyle. Do not edit.");
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.comment));
    }
}
