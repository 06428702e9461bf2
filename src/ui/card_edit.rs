//! Card Edit View
//!
//! Renders entirely from the record carried by the route, no fetch.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Card;
use crate::logic::cards::card_description;

fn field_line<'a>(label: &'a str, value: Option<&'a str>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<18}", label), Style::default().fg(Color::Yellow)),
        Span::raw(value.unwrap_or("-")),
    ])
}

pub fn render_card_edit(f: &mut Frame, area: Rect, id: &str, card: &Card) {
    let block = Block::default()
        .title(format!(" Edit card {} ", id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let description = card_description(card);

    let lines = vec![
        Line::from(vec![
            Span::styled("Card: ", Style::default().fg(Color::Yellow)),
            Span::styled(id, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(
            description,
            Style::default().fg(Color::DarkGray),
        )),
        Line::default(),
        field_line("Quick select", card.from_quick_select.as_deref()),
        field_line(
            "Action args",
            card.action.as_ref().and_then(|a| a.args.as_deref()),
        ),
        field_line("Function", card.func.as_deref()),
        Line::default(),
        Line::from(Span::styled(
            "m: assign music from the library   Esc: back",
            Style::default().fg(Color::Gray),
        )),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
