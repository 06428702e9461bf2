//! Library Path Helpers
//!
//! The path parameter travels URL-encoded, as handed over by navigation;
//! these helpers decode it for the RPC call and build child/parent paths.
//! Paths are relative to the library root, spelled `./`.

use std::borrow::Cow;

/// Path of the library root
pub const ROOT: &str = "./";

/// Decode a URL-encoded path parameter. Invalid encodings fall back to the
/// input unchanged.
pub fn decode(path: &str) -> String {
    urlencoding::decode(path)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| path.to_string())
}

/// URL-encode a decoded path for the navigation parameter
pub fn encode(path: &str) -> String {
    urlencoding::encode(path).into_owned()
}

/// Append one entry name to a decoded parent path
pub fn join(parent: &str, name: &str) -> String {
    if parent == ROOT || parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent.trim_end_matches('/'), name)
    }
}

/// Decoded parent of a decoded path; the root is its own parent
pub fn parent(path: &str) -> String {
    if path == ROOT || path.is_empty() {
        return ROOT.to_string();
    }

    match path.rfind('/') {
        Some(idx) => path[..idx].to_string(),
        None => ROOT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_decodes_to_itself() {
        assert_eq!(decode(ROOT), ROOT);
    }

    #[test]
    fn test_decode_roundtrip() {
        let path = "Hörspiele/Folge 01";
        assert_eq!(decode(&encode(path)), path);
    }

    #[test]
    fn test_decode_invalid_encoding_falls_back() {
        assert_eq!(decode("bad%zz"), "bad%zz");
    }

    #[test]
    fn test_join_from_root() {
        assert_eq!(join(ROOT, "Movies"), "Movies");
    }

    #[test]
    fn test_join_nested() {
        assert_eq!(join("Movies", "Action"), "Movies/Action");
        assert_eq!(join("Movies/", "Action"), "Movies/Action");
    }

    #[test]
    fn test_parent_walks_up() {
        assert_eq!(parent("Movies/Action"), "Movies");
        assert_eq!(parent("Movies"), ROOT);
        assert_eq!(parent(ROOT), ROOT);
    }
}
