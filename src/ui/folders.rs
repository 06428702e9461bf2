//! Folder Browser View
//!
//! Renders one of the five browser states: progress while loading, the
//! localized error message, one of the two empty-state messages, or the
//! folder list itself.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::{Translations, EMPTY_FOLDER, LOADING_ERROR, NO_MUSIC};
use crate::logic::folders::{browser_view, BrowserView};
use crate::model::LibraryModel;

use super::{folder_list, icons::IconRenderer};

fn render_message(f: &mut Frame, area: Rect, path: &str, text: String) {
    let block = Block::default()
        .title(format!(" {} ", path))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(Paragraph::new(text).block(block), area);
}

pub fn render_folders(
    f: &mut Frame,
    area: Rect,
    library: &LibraryModel,
    filter_query: &str,
    is_selecting: bool,
    translations: &Translations,
    icon_renderer: &IconRenderer,
) {
    let path = library.decoded_path();

    match browser_view(&library.fetch, filter_query) {
        BrowserView::Loading => {
            render_message(f, area, &path, "Loading...".to_string());
        }
        BrowserView::LoadError => {
            render_message(f, area, &path, translations.get(LOADING_ERROR).to_string());
        }
        BrowserView::NoMatches => {
            render_message(
                f,
                area,
                &path,
                format!("☝️ {}", translations.get(NO_MUSIC)),
            );
        }
        BrowserView::EmptyFolder => {
            render_message(
                f,
                area,
                &path,
                format!("{} 🙈", translations.get(EMPTY_FOLDER)),
            );
        }
        BrowserView::Entries(entries) => {
            folder_list::render_folder_list(
                f,
                area,
                &path,
                &entries,
                is_selecting,
                library.selected,
                icon_renderer,
            );
        }
    }
}
