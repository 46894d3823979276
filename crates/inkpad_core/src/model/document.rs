//! Document domain model.
//!
//! # Responsibility
//! - Define the typed document key used by every caller instead of display labels.
//! - Derive word/character statistics from document content.
//!
//! # Invariants
//! - A `DocumentKey` is also the display name and sort key of its document.
//! - Content is replaced as a whole; no diffing is modeled.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").expect("valid word regex"));

/// Prefix used when the store names a freshly created document.
pub const DOCUMENT_NAME_PREFIX: &str = "Document";

/// Stable identifier (and display name) of one document in a store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Wraps a display name as a document key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Key assigned to the `n`-th created document, e.g. `Document 3`.
    pub fn numbered(n: usize) -> Self {
        Self(format!("{DOCUMENT_NAME_PREFIX} {n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DocumentKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DocumentKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One named document held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub key: DocumentKey,
    /// Plain text; inline markup is stored literally (`**bold**`).
    pub content: String,
}

impl Document {
    /// Creates a document with empty content.
    pub fn empty(key: DocumentKey) -> Self {
        Self {
            key,
            content: String::new(),
        }
    }
}

/// Word and character counts of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    /// Maximal runs of non-whitespace characters.
    pub words: usize,
    /// Unicode scalar values, whitespace included.
    pub chars: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: word_count(text),
            chars: char_count(text),
        }
    }
}

/// Counts maximal non-whitespace runs. Blank text has zero words.
pub fn word_count(text: &str) -> usize {
    WORD_RE.find_iter(text.trim()).count()
}

/// Counts characters including whitespace.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}
