//! Cards List View
//!
//! One row per registered card: bookmark icon, card id as primary text,
//! computed description as secondary text. An empty mapping renders the
//! no-cards message instead of a list.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::logic::cards::{CardRowCache, NO_CARDS_MESSAGE};
use crate::model::CardsModel;

use super::icons::IconRenderer;

pub fn render_cards_list(
    f: &mut Frame,
    area: Rect,
    cards: &CardsModel,
    cache: &mut CardRowCache,
    icon_renderer: &IconRenderer,
) {
    let block = Block::default()
        .title(" Cards ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if cards.is_empty() {
        let message = Paragraph::new(NO_CARDS_MESSAGE).block(block);
        f.render_widget(message, area);
        return;
    }

    let rows: Vec<ListItem> = cache
        .rows(cards)
        .iter()
        .map(|(id, description)| {
            ListItem::new(Line::from(vec![
                Span::raw(icon_renderer.bookmark()),
                Span::styled(id.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw("  "),
                Span::styled(description.clone(), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(cards.selected);

    f.render_stateful_widget(list, area, &mut state);
}
