//! Folder Browser Presentation Logic
//!
//! Maps the fetch state plus the active filter to exactly one of the five
//! things the browser can show. Keeping the decision out of the render
//! function makes the state machine testable without a terminal.

use crate::api::FolderEntry;
use crate::model::library::FetchState;

use super::filter::filter_entries;

/// What the folder browser shows for a given fetch state and filter
#[derive(Debug, PartialEq)]
pub enum BrowserView<'a> {
    /// Fetch still in flight
    Loading,
    /// Fetch failed; the localized loading-error message
    LoadError,
    /// Filter active but nothing passed it
    NoMatches,
    /// Folder empty and no filter active
    EmptyFolder,
    /// Filtered entries to hand to the list renderer
    Entries(Vec<&'a FolderEntry>),
}

pub fn browser_view<'a>(fetch: &'a FetchState, filter: &str) -> BrowserView<'a> {
    let entries = match fetch {
        FetchState::Loading => return BrowserView::Loading,
        FetchState::Error => return BrowserView::LoadError,
        FetchState::Loaded(entries) => entries,
    };

    let filtered = filter_entries(entries, filter);
    if filtered.is_empty() {
        if !filter.is_empty() {
            return BrowserView::NoMatches;
        }
        return BrowserView::EmptyFolder;
    }

    BrowserView::Entries(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EntryKind;

    fn entry(name: &str) -> FolderEntry {
        FolderEntry {
            name: name.to_string(),
            kind: EntryKind::File,
            uri: None,
        }
    }

    #[test]
    fn test_loading_state() {
        assert_eq!(browser_view(&FetchState::Loading, ""), BrowserView::Loading);
        // Filter has no effect while loading
        assert_eq!(
            browser_view(&FetchState::Loading, "abc"),
            BrowserView::Loading
        );
    }

    #[test]
    fn test_error_state_never_shows_entries() {
        assert_eq!(browser_view(&FetchState::Error, ""), BrowserView::LoadError);
        assert_eq!(
            browser_view(&FetchState::Error, "abc"),
            BrowserView::LoadError
        );
    }

    #[test]
    fn test_loaded_unfiltered_shows_all() {
        let state = FetchState::Loaded(vec![entry("Alpha"), entry("beta")]);
        match browser_view(&state, "") {
            BrowserView::Entries(entries) => {
                assert_eq!(entries.len(), 2);
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_loaded_filter_is_case_insensitive() {
        let state = FetchState::Loaded(vec![entry("Alpha"), entry("beta")]);
        match browser_view(&state, "AL") {
            BrowserView::Entries(entries) => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].name, "Alpha");
            }
            other => panic!("expected entries, got {:?}", other),
        }
    }

    #[test]
    fn test_no_match_with_active_filter() {
        let state = FetchState::Loaded(vec![entry("Alpha"), entry("beta")]);
        assert_eq!(browser_view(&state, "zzz"), BrowserView::NoMatches);
    }

    #[test]
    fn test_empty_folder_without_filter() {
        let state = FetchState::Loaded(vec![]);
        assert_eq!(browser_view(&state, ""), BrowserView::EmptyFolder);
    }

    #[test]
    fn test_empty_folder_with_filter_still_reports_no_matches() {
        // An active filter over an empty folder reads as "nothing matches",
        // not "empty folder"
        let state = FetchState::Loaded(vec![]);
        assert_eq!(browser_view(&state, "abc"), BrowserView::NoMatches);
    }
}
