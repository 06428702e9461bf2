//! Top-level render orchestration

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::logic::filter::filter_entries;
use crate::model::Route;
use crate::App;

use super::{card_edit, cards_list, filter, folders, status_bar};

/// Split the frame into main content, optional filter box, status line
fn split_frame(area: Rect, with_filter: bool) -> (Rect, Option<Rect>, Rect) {
    if with_filter {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);
        (chunks[0], Some(chunks[1]), chunks[2])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);
        (chunks[0], None, chunks[1])
    }
}

pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let route = app.model.navigation.current().clone();
    let toast = app
        .model
        .ui
        .toast_message
        .as_ref()
        .map(|(message, _)| message.clone());

    match route {
        Route::Cards => {
            let (main_area, _, status_area) = split_frame(size, false);

            cards_list::render_cards_list(
                f,
                main_area,
                &app.model.cards,
                &mut app.cards_cache,
                &app.icon_renderer,
            );
            status_bar::render_status_bar(
                f,
                status_area,
                "Cards",
                "Enter: edit  Tab: library  r: refresh  q: quit",
                toast.as_deref(),
            );
        }

        Route::CardEdit { id, card } => {
            let (main_area, _, status_area) = split_frame(size, false);

            card_edit::render_card_edit(f, main_area, &id, &card);
            status_bar::render_status_bar(
                f,
                status_area,
                "Edit",
                "m: assign music  Esc: back  q: quit",
                toast.as_deref(),
            );
        }

        Route::Library => {
            let (main_area, filter_area, status_area) = split_frame(size, true);

            folders::render_folders(
                f,
                main_area,
                &app.model.library,
                &app.model.ui.filter_query,
                app.model.is_selecting(),
                &app.translations,
                &app.icon_renderer,
            );

            if let Some(filter_area) = filter_area {
                let match_count = app
                    .model
                    .library
                    .entries()
                    .map(|entries| filter_entries(entries, &app.model.ui.filter_query).len());

                filter::render_filter_input(
                    f,
                    filter_area,
                    &app.model.ui.filter_query,
                    app.model.ui.filter_active,
                    match_count,
                    app.model.ui.vim_mode,
                );
            }

            let filter_key = if app.model.ui.vim_mode { "/" } else { "Ctrl-F" };
            let hints = format!(
                "Enter: open  Backspace: up  {}: filter  Tab: cards  q: quit",
                filter_key
            );
            status_bar::render_status_bar(f, status_area, "Library", &hints, toast.as_deref());
        }
    }
}
