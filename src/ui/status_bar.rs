//! Status Bar
//!
//! One line at the bottom: current view and key hints on the left, toast
//! on the right when one is showing.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    view_label: &str,
    hints: &str,
    toast: Option<&str>,
) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", view_label),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ];

    if let Some(message) = toast {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message,
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
