//! API Response Handler
//!
//! Applies responses from the background RPC worker to the model. The
//! sequence guard for listings lives in the library model; this handler
//! only logs what was discarded.

use crate::services::api::ApiResponse;
use crate::App;

pub fn handle_api_response(app: &mut App, response: ApiResponse) {
    match response {
        ApiResponse::FilesResult { path, seq, entries } => {
            if let Err(error) = &entries {
                crate::log_debug(&format!(
                    "Listing failed for path={} seq={}: {}",
                    path, seq, error
                ));
            }

            if !app.model.library.apply_files_result(seq, entries) {
                crate::log_debug(&format!(
                    "Discarding stale listing for path={} seq={} (latest is {})",
                    path,
                    seq,
                    app.model.library.latest_seq()
                ));
            }
        }

        ApiResponse::CardsResult { cards } => match cards {
            Ok(cards) => app.model.cards.replace(cards),
            Err(error) => {
                crate::log_debug(&format!("Cards fetch failed: {}", error));
                app.model.ui.show_toast("Could not load cards".to_string());
            }
        },

        ApiResponse::RegisterResult { card_id, result } => match result {
            Ok(()) => {
                app.model
                    .ui
                    .show_toast(format!("Music registered to card {}", card_id));
                // Refresh the mapping so the list reflects the new binding
                app.request_cards();
            }
            Err(error) => {
                crate::log_debug(&format!(
                    "Registration failed for card {}: {}",
                    card_id, error
                ));
                app.model.ui.show_toast("Registration failed".to_string());
            }
        },
    }
}
