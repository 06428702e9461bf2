//! Music Filter Logic
//!
//! Pure functions for filtering folder entries by the library filter text.
//! An entry passes if the filter is empty or its name contains the filter,
//! case-insensitively.

use crate::api::FolderEntry;

/// Match the filter against one entry name
pub fn entry_matches(filter: &str, name: &str) -> bool {
    if filter.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&filter.to_lowercase())
}

/// Filter a listing, preserving order. The input list is never mutated;
/// the filtered view is recomputed from it on every call.
pub fn filter_entries<'a>(entries: &'a [FolderEntry], filter: &str) -> Vec<&'a FolderEntry> {
    entries
        .iter()
        .filter(|entry| entry_matches(filter, &entry.name))
        .collect()
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
    fn test_empty_filter_matches_everything() {
        assert!(entry_matches("", "Alpha"));
        assert!(entry_matches("", ""));
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        assert!(entry_matches("AL", "Alpha"));
        assert!(entry_matches("alpha", "ALPHA"));
        assert!(entry_matches("pH", "Alpha"));
        assert!(!entry_matches("AL", "beta"));
    }

    #[test]
    fn test_filter_entries_keeps_all_on_empty_filter() {
        let entries = vec![entry("Alpha"), entry("beta")];
        let filtered = filter_entries(&entries, "");
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_entries_applies_substring() {
        let entries = vec![entry("Alpha"), entry("beta")];
        let filtered = filter_entries(&entries, "AL");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alpha");
    }

    #[test]
    fn test_filter_entries_preserves_order() {
        let entries = vec![entry("ab"), entry("zz"), entry("ba")];
        let filtered = filter_entries(&entries, "a");
        let names: Vec<_> = filtered.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["ab", "ba"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let entries = vec![entry("Alpha"), entry("beta")];
        assert!(filter_entries(&entries, "zzz").is_empty());
    }
}
