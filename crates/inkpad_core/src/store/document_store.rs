//! In-memory document store.
//!
//! # Responsibility
//! - Own the ordered set of named documents and the active document key.
//! - Track when the active work was last saved.
//!
//! # Invariants
//! - `active` is always the key of a stored document.
//! - Insertion order is display order; documents are never removed.
//! - Every operation is total: absent keys read as empty content.

use crate::model::document::{Document, DocumentKey, TextStats};
use log::{debug, info};

/// Number of empty documents a default store starts with.
pub const DEFAULT_SEED_DOCUMENTS: usize = 2;

/// Ordered document set plus active key and last-saved timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStore {
    documents: Vec<Document>,
    active: DocumentKey,
    last_saved_at: i64,
}

impl DocumentStore {
    /// Creates a store seeded with `Document 1` and `Document 2`.
    ///
    /// `now_ms` becomes the initial last-saved time.
    pub fn new(now_ms: i64) -> Self {
        Self::with_seed_count(DEFAULT_SEED_DOCUMENTS, now_ms)
    }

    /// Creates a store seeded with `count` empty documents (at least one).
    pub fn with_seed_count(count: usize, now_ms: i64) -> Self {
        let documents = (1..=count.max(1))
            .map(|n| Document::empty(DocumentKey::numbered(n)))
            .collect::<Vec<_>>();
        let active = documents[0].key.clone();
        Self {
            documents,
            active,
            last_saved_at: now_ms,
        }
    }

    /// Replaces the content of the active document.
    pub fn set_active_content(&mut self, text: impl Into<String>) {
        let active = &self.active;
        if let Some(doc) = self.documents.iter_mut().find(|doc| doc.key == *active) {
            doc.content = text.into();
        }
    }

    /// Makes `key` active when it exists and returns the content now shown.
    ///
    /// Unknown keys leave the active document unchanged and read as empty
    /// content, so stale UI labels never fail.
    pub fn switch_to(&mut self, key: &DocumentKey) -> &str {
        if self.contains(key) {
            if *key != self.active {
                debug!("event=document_switch module=store status=ok");
            }
            self.active = key.clone();
            self.active_content()
        } else {
            debug!("event=document_switch module=store status=missing");
            ""
        }
    }

    /// Appends `Document {n}` with `n = len + 1`, activates it and returns its key.
    pub fn create_document(&mut self) -> DocumentKey {
        let key = DocumentKey::numbered(self.documents.len() + 1);
        self.documents.push(Document::empty(key.clone()));
        self.active = key.clone();
        info!(
            "event=document_create module=store status=ok count={}",
            self.documents.len()
        );
        key
    }

    /// Records `now_ms` as the last-saved time.
    pub fn mark_saved(&mut self, now_ms: i64) {
        self.last_saved_at = now_ms;
    }

    /// Word count of the active content.
    pub fn word_count(&self) -> usize {
        self.stats().words
    }

    /// Character count of the active content.
    pub fn char_count(&self) -> usize {
        self.stats().chars
    }

    pub fn stats(&self) -> TextStats {
        TextStats::of(self.active_content())
    }

    pub fn active_key(&self) -> &DocumentKey {
        &self.active
    }

    pub fn active_content(&self) -> &str {
        self.content_of(&self.active)
    }

    /// Content stored under `key`, or `""` when absent.
    pub fn content_of(&self, key: &DocumentKey) -> &str {
        self.documents
            .iter()
            .find(|doc| doc.key == *key)
            .map(|doc| doc.content.as_str())
            .unwrap_or("")
    }

    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.documents.iter().any(|doc| doc.key == *key)
    }

    /// Documents in display order.
    pub fn documents(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn last_saved_at(&self) -> i64 {
        self.last_saved_at
    }
}
