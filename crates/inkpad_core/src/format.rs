//! Inline markup helpers.
//!
//! Formatting is naive splicing: markers are inserted around the selected
//! range without inspecting neighbouring text, so wrapping twice nests
//! markers and there is no unwrap.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inline formatting kinds offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Bold,
    Italic,
    Underline,
}

impl Marker {
    /// Literal delimiter stored in the text.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
            Self::Underline => "__",
        }
    }

    /// Stable name used by front ends.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
        }
    }

    /// Parses a marker from its name (`bold|italic|underline`).
    pub fn parse(value: &str) -> Result<Self, MarkerParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "underline" => Ok(Self::Underline),
            other => Err(MarkerParseError(other.to_string())),
        }
    }
}

/// Unknown marker name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerParseError(pub String);

impl Display for MarkerParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported marker `{}`; expected bold|italic|underline",
            self.0
        )
    }
}

impl Error for MarkerParseError {}

/// Selected range in character offsets, `[start, end)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Orders the bounds and clamps them to `len`.
    pub fn normalized(self, len: usize) -> Self {
        let start = self.start.min(self.end).min(len);
        let end = self.start.max(self.end).min(len);
        Self { start, end }
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// Surrounds `text[start..end)` (character offsets) with `marker`.
///
/// Returns `text` unchanged when the selection is empty after clamping.
pub fn wrap(text: &str, start: usize, end: usize, marker: &str) -> String {
    let selection = Selection::new(start, end).normalized(text.chars().count());
    if selection.is_empty() {
        return text.to_string();
    }

    let from = byte_offset(text, selection.start);
    let to = byte_offset(text, selection.end);
    let mut out = String::with_capacity(text.len() + marker.len() * 2);
    out.push_str(&text[..from]);
    out.push_str(marker);
    out.push_str(&text[from..to]);
    out.push_str(marker);
    out.push_str(&text[to..]);
    out
}

/// Typed variant of [`wrap`] used by the editor service.
pub fn wrap_selection(text: &str, selection: Selection, marker: Marker) -> String {
    wrap(text, selection.start, selection.end, marker.as_str())
}

fn byte_offset(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len())
}
