//! Status bar rendering with keybindings and translation counts

use crate::config::KeywordPolicy;
use crate::parser::parse::TranslationSummary;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// `1 line`, `2 lines`.
fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {}", noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    summary: &TranslationSummary,
    policy: KeywordPolicy,
) {
    let warnings = summary.diagnostics.len();

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge = |text: String, bg: Color| {
        Span::styled(
            text,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
    };
    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);

    let mut left_spans = vec![
        badge(
            format!(" {} ", count_label(summary.statements, "statement")),
            DEFAULT_THEME.primary,
        ),
        badge(
            format!(" {} ", count_label(summary.lines, "line")),
            DEFAULT_THEME.secondary,
        ),
        if warnings == 0 {
            badge(" no warnings ".to_string(), DEFAULT_THEME.success)
        } else {
            badge(format!(" {} ", count_label(warnings, "warning")), DEFAULT_THEME.warning)
        },
    ];
    if policy == KeywordPolicy::LiteralPrefix {
        left_spans.push(badge(" LITERAL ".to_string(), DEFAULT_THEME.keyword));
    }
    left_spans.push(Span::styled(
        format!(" {} ", message),
        bar.fg(DEFAULT_THEME.fg),
    ));

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↑/↓ ", key_style),
        Span::styled(" scroll ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" switch pane ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
