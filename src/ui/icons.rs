//! Icon rendering for list rows
//!
//! Three modes: emoji (default), nerd font glyphs, plain ASCII for
//! terminals without either.

use crate::api::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,
    NerdFont,
    Ascii,
}

impl IconMode {
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "nerdfont" | "nerd" | "nf" => IconMode::NerdFont,
            "ascii" => IconMode::Ascii,
            _ => IconMode::Emoji,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IconRenderer {
    mode: IconMode,
}

impl IconRenderer {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Fixed icon for cards list rows
    pub fn bookmark(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🔖 ",
            IconMode::NerdFont => "\u{f02e} ",
            IconMode::Ascii => "* ",
        }
    }

    pub fn entry(&self, kind: EntryKind) -> &'static str {
        match (self.mode, kind) {
            (IconMode::Emoji, EntryKind::Directory) => "📁 ",
            (IconMode::Emoji, EntryKind::File) => "🎵 ",
            (IconMode::Emoji, EntryKind::Playlist) => "🎶 ",
            (IconMode::NerdFont, EntryKind::Directory) => "\u{f07b} ",
            (IconMode::NerdFont, EntryKind::File) => "\u{f001} ",
            (IconMode::NerdFont, EntryKind::Playlist) => "\u{f03a} ",
            (IconMode::Ascii, EntryKind::Directory) => "[D] ",
            (IconMode::Ascii, EntryKind::File) => "[F] ",
            (IconMode::Ascii, EntryKind::Playlist) => "[P] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing_defaults_to_emoji() {
        assert_eq!(IconMode::from_config("nerdfont"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("NF"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("ascii"), IconMode::Ascii);
        assert_eq!(IconMode::from_config("emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("whatever"), IconMode::Emoji);
    }
}
