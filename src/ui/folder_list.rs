//! Folder List
//!
//! The child list widget the browser delegates to: one row per entry with
//! a kind icon, names truncated to the pane width.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::api::FolderEntry;

use super::icons::IconRenderer;

/// Truncate a name to the given display width, ellipsis at the end
fn truncate_name(name: &str, max_width: usize) -> String {
    if name.width() <= max_width {
        return name.to_string();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for c in name.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            break;
        }
        truncated.push(c);
        used += char_width;
    }
    truncated.push('…');

    truncated
}

pub fn render_folder_list(
    f: &mut Frame,
    area: Rect,
    path: &str,
    entries: &[&FolderEntry],
    is_selecting: bool,
    selected: Option<usize>,
    icon_renderer: &IconRenderer,
) {
    let title = if is_selecting {
        format!(" {} — pick music for the card ", path)
    } else {
        format!(" {} ", path)
    };

    let border_color = if is_selecting {
        Color::Yellow
    } else {
        Color::Cyan
    };

    // Room inside the borders, minus highlight symbol and icon
    let name_width = (area.width as usize).saturating_sub(8);

    let rows: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(icon_renderer.entry(entry.kind)),
                Span::raw(truncate_name(&entry.name, name_width)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(selected);

    f.render_stateful_widget(list, area, &mut state);
}
