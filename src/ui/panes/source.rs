//! Source pane rendering with syntax highlighting
//!
//! Highlighting reuses the real [`Lexer`]: each line is lexed on its own with
//! whitespace kept, so every character belongs to exactly one token. A line
//! the lexer rejects is drawn in the error colour instead.

use super::{clamp_scroll, pane_block, visible_height};
use crate::config::KeywordPolicy;
use crate::parser::lexer::{Lexer, TokenKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn token_style(kind: TokenKind) -> Style {
    match kind {
        TokenKind::Keyword => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        TokenKind::TypeName => Style::default().fg(DEFAULT_THEME.type_name),
        TokenKind::Number => Style::default().fg(DEFAULT_THEME.number),
        TokenKind::SyntaxSymbol => Style::default().fg(DEFAULT_THEME.symbol),
        TokenKind::VariableName
        | TokenKind::Whitespace
        | TokenKind::StreamStart
        | TokenKind::StreamEnd => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Split one source line into styled spans.
pub fn highlight_line(line: &str, policy: KeywordPolicy) -> Line<'static> {
    let Ok(tokens) = Lexer::with_policy(line, policy).raw_tokens() else {
        return Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(DEFAULT_THEME.error),
        ));
    };

    let chars: Vec<char> = line.chars().collect();
    let starts: Vec<usize> = tokens.iter().map(|t| t.location.column - 1).collect();

    let spans: Vec<Span<'static>> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let end = starts.get(i + 1).copied().unwrap_or(chars.len());
            let text: String = chars[starts[i]..end].iter().collect();
            Span::styled(text, token_style(token.kind))
        })
        .collect();

    Line::from(spans)
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source: &str,
    policy: KeywordPolicy,
    is_focused: bool,
    scroll: &mut usize,
) {
    let lines: Vec<&str> = source.lines().collect();
    let visible = visible_height(area);
    clamp_scroll(scroll, lines.len(), visible);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll)
        .take(visible)
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            )];
            spans.extend(highlight_line(line, policy).spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(pane_block("Source", is_focused));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &Line) -> Vec<String> {
        line.spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn test_highlight_keeps_every_character() {
        let line = highlight_line("declare float  rate = 2.50", KeywordPolicy::WordBoundary);
        assert_eq!(
            texts(&line),
            vec!["declare", " ", "float", "  ", "rate", " ", "=", " ", "2.50"]
        );
    }

    #[test]
    fn test_highlight_styles_by_kind() {
        let line = highlight_line("print x", KeywordPolicy::WordBoundary);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.keyword));
        assert_eq!(line.spans[2].style.fg, Some(DEFAULT_THEME.fg));
    }

    #[test]
    fn test_unlexable_line_is_marked() {
        let line = highlight_line("print $", KeywordPolicy::WordBoundary);
        assert_eq!(line.spans.len(), 1);
        assert_eq!(line.spans[0].style.fg, Some(DEFAULT_THEME.error));
    }
}
