//! Library sub-model
//!
//! The folder-listing fetch machine. Every path change resets the state to
//! Loading and stamps the outgoing request with a fresh sequence number;
//! completions carrying any other stamp are discarded, so a slow response
//! from an abandoned path can never overwrite the listing of the path the
//! user is actually on.

use crate::api::FolderEntry;
use crate::logic::path;

/// Fetch lifecycle for the current path
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Error,
    Loaded(Vec<FolderEntry>),
}

#[derive(Debug, Clone)]
pub struct LibraryModel {
    /// Current path parameter, URL-encoded as handed over by navigation
    pub path: String,
    pub fetch: FetchState,
    /// Stamp of the most recently issued listing request
    latest_seq: u64,
    /// Selection within the filtered listing
    pub selected: Option<usize>,
}

impl LibraryModel {
    pub fn new() -> Self {
        Self {
            path: path::ROOT.to_string(),
            fetch: FetchState::Loading,
            latest_seq: 0,
            selected: None,
        }
    }

    /// Reset to Loading for a (possibly new) path and record the stamp of
    /// the request about to be issued
    pub fn begin_fetch(&mut self, path: String, seq: u64) {
        self.path = path;
        self.fetch = FetchState::Loading;
        self.latest_seq = seq;
        self.selected = None;
    }

    /// Apply a listing completion.
    ///
    /// Returns false when the completion is stale (its stamp is not the
    /// latest issued); stale completions leave the state untouched.
    pub fn apply_files_result(
        &mut self,
        seq: u64,
        entries: Result<Vec<FolderEntry>, String>,
    ) -> bool {
        if seq != self.latest_seq {
            return false;
        }

        self.fetch = match entries {
            Ok(entries) => {
                if self.selected.is_none() && !entries.is_empty() {
                    self.selected = Some(0);
                }
                FetchState::Loaded(entries)
            }
            Err(_) => FetchState::Error,
        };

        true
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    /// The unfiltered listing, when loaded
    pub fn entries(&self) -> Option<&[FolderEntry]> {
        match &self.fetch {
            FetchState::Loaded(entries) => Some(entries),
            _ => None,
        }
    }

    /// Decoded form of the current path
    pub fn decoded_path(&self) -> String {
        path::decode(&self.path)
    }
}

impl Default for LibraryModel {
    fn default() -> Self {
        Self::new()
    }
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
    fn test_starts_loading_at_root() {
        let model = LibraryModel::new();
        assert_eq!(model.path, "./");
        assert_eq!(model.fetch, FetchState::Loading);
    }

    #[test]
    fn test_begin_fetch_resets_state() {
        let mut model = LibraryModel::new();
        model.apply_files_result(0, Ok(vec![entry("a")]));
        assert!(matches!(model.fetch, FetchState::Loaded(_)));

        model.begin_fetch("Movies".to_string(), 1);
        assert_eq!(model.fetch, FetchState::Loading);
        assert_eq!(model.latest_seq(), 1);
        assert_eq!(model.selected, None);
    }

    #[test]
    fn test_matching_result_lands() {
        let mut model = LibraryModel::new();
        model.begin_fetch("Movies".to_string(), 1);

        assert!(model.apply_files_result(1, Ok(vec![entry("a")])));
        assert_eq!(model.entries().unwrap().len(), 1);
        assert_eq!(model.selected, Some(0));
    }

    #[test]
    fn test_matching_error_lands() {
        let mut model = LibraryModel::new();
        model.begin_fetch("Movies".to_string(), 1);

        assert!(model.apply_files_result(1, Err("boom".to_string())));
        assert_eq!(model.fetch, FetchState::Error);
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut model = LibraryModel::new();
        model.begin_fetch("Movies".to_string(), 1);
        model.begin_fetch("Books".to_string(), 2);

        // Completion for the abandoned request
        assert!(!model.apply_files_result(1, Ok(vec![entry("old")])));
        assert_eq!(model.fetch, FetchState::Loading);

        // The current request still lands normally
        assert!(model.apply_files_result(2, Ok(vec![entry("new")])));
        assert_eq!(model.entries().unwrap()[0].name, "new");
    }
}
