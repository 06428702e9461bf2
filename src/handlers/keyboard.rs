//! Keyboard Input Handler
//!
//! Dispatches key events by current route. The filter input grabs
//! keystrokes while active, before any route handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::{EntryKind, FolderEntry};
use crate::logic::{filter, path};
use crate::model::Route;
use crate::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.filter_active {
        handle_filter_key(app, key);
        return;
    }

    match app.model.navigation.current().clone() {
        Route::Cards => handle_cards_key(app, key),
        Route::CardEdit { id, .. } => handle_card_edit_key(app, key, id),
        Route::Library => handle_library_key(app, key),
    }
}

/// Entries of the current listing that pass the filter, cloned out so the
/// handler can mutate the app afterwards
fn filtered_entries(app: &App) -> Vec<FolderEntry> {
    let entries = app.model.library.entries().unwrap_or(&[]);
    filter::filter_entries(entries, &app.model.ui.filter_query)
        .into_iter()
        .cloned()
        .collect()
}

/// Clamp the library selection to the filtered listing
fn reset_library_selection(app: &mut App) {
    app.model.library.selected = if filtered_entries(app).is_empty() {
        None
    } else {
        Some(0)
    };
}

fn move_selection(selected: &mut Option<usize>, len: usize, down: bool) {
    if len == 0 {
        *selected = None;
        return;
    }

    let current = selected.unwrap_or(0);
    *selected = Some(if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    });
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.model.ui.clear_filter();
            reset_library_selection(app);
        }
        KeyCode::Enter => {
            // Accept the filter, keep the query
            app.model.ui.filter_active = false;
        }
        KeyCode::Backspace => {
            app.model.ui.filter_query.pop();
            reset_library_selection(app);
        }
        KeyCode::Char(c) => {
            app.model.ui.filter_query.push(c);
            reset_library_selection(app);
        }
        _ => {}
    }
}

fn handle_cards_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Tab => app.switch_to_library(),
        KeyCode::Down => {
            let len = app.model.cards.len();
            move_selection(&mut app.model.cards.selected, len, true)
        }
        KeyCode::Up => {
            let len = app.model.cards.len();
            move_selection(&mut app.model.cards.selected, len, false)
        }
        KeyCode::Char('j') if vim => {
            let len = app.model.cards.len();
            move_selection(&mut app.model.cards.selected, len, true)
        }
        KeyCode::Char('k') if vim => {
            let len = app.model.cards.len();
            move_selection(&mut app.model.cards.selected, len, false)
        }
        KeyCode::Enter => {
            // Open the edit view with the full record attached, so it can
            // render without another fetch
            if let Some((id, card)) = app.model.selected_card() {
                let route = Route::CardEdit {
                    id: id.clone(),
                    card: card.clone(),
                };
                app.model.navigation.push(route);
            }
        }
        KeyCode::Char('r') => app.request_cards(),
        _ => {}
    }
}

fn handle_card_edit_key(app: &mut App, key: KeyEvent, card_id: String) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            app.model.navigation.pop();
        }
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('m') => {
            // Pick music for this card in the library
            app.model.ui.selecting_for = Some(card_id);
            app.model.navigation.push(Route::Library);
            app.navigate_library(app.model.library.path.clone());
        }
        _ => {}
    }
}

fn handle_library_key(app: &mut App, key: KeyEvent) {
    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Tab => {
            app.model.ui.selecting_for = None;
            app.switch_to_cards();
        }
        KeyCode::Down => {
            let len = filtered_entries(app).len();
            move_selection(&mut app.model.library.selected, len, true);
        }
        KeyCode::Up => {
            let len = filtered_entries(app).len();
            move_selection(&mut app.model.library.selected, len, false);
        }
        KeyCode::Char('j') if vim => {
            let len = filtered_entries(app).len();
            move_selection(&mut app.model.library.selected, len, true);
        }
        KeyCode::Char('k') if vim => {
            let len = filtered_entries(app).len();
            move_selection(&mut app.model.library.selected, len, false);
        }
        KeyCode::Enter => {
            let selected = app
                .model
                .library
                .selected
                .and_then(|idx| filtered_entries(app).get(idx).cloned());

            if let Some(entry) = selected {
                match entry.kind {
                    EntryKind::Directory => {
                        let child =
                            path::join(&app.model.library.decoded_path(), &entry.name);
                        app.navigate_library(path::encode(&child));
                    }
                    _ => {
                        if let Some(card_id) = app.model.ui.selecting_for.take() {
                            app.register_music(card_id, entry.register_uri().to_string());
                            app.model.navigation.pop();
                        }
                    }
                }
            }
        }
        KeyCode::Backspace | KeyCode::Left => go_up(app),
        KeyCode::Char('h') if vim => go_up(app),
        KeyCode::Char('/') if vim => app.model.ui.filter_active = true,
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.filter_active = true;
        }
        KeyCode::Esc => {
            if !app.model.ui.filter_query.is_empty() {
                app.model.ui.clear_filter();
                reset_library_selection(app);
            } else {
                app.model.ui.selecting_for = None;
                app.model.navigation.pop();
            }
        }
        KeyCode::Char('r') => app.refresh_library(),
        _ => {}
    }
}

/// Navigate to the parent folder; at the root, fall back to popping the route
fn go_up(app: &mut App) {
    let decoded = app.model.library.decoded_path();
    if decoded == path::ROOT {
        app.model.navigation.pop();
    } else {
        app.navigate_library(path::encode(&path::parent(&decoded)));
    }
}
