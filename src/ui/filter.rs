//! Filter Input
//!
//! Renders the music filter box below the folder list, with match count and
//! a blinking cursor while active.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_filter_input(
    f: &mut Frame,
    area: Rect,
    query: &str,
    active: bool,
    match_count: Option<usize>,
    vim_mode: bool,
) {
    let title = if active {
        match match_count {
            Some(count) => format!(" Filter ({} matches) - Esc to cancel ", count),
            None => " Filter - Esc to cancel ".to_string(),
        }
    } else if !query.is_empty() {
        match match_count {
            Some(count) => format!(" Filter ({} matches) - Esc to clear ", count),
            None => " Filter - Esc to clear ".to_string(),
        }
    } else {
        let filter_key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Filter ({}) ", filter_key)
    };

    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if active {
        Line::from(vec![
            Span::raw("Match: "),
            Span::raw(query),
            Span::styled("█", cursor_style),
        ])
    } else {
        Line::from(vec![Span::styled(
            format!("Match: {}", query),
            Style::default().fg(Color::Gray),
        )])
    };

    let paragraph = Paragraph::new(vec![input_line]).block(block);

    f.render_widget(paragraph, area);
}
