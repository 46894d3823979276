//! Domain model for documents and the simulated session.
//!
//! # Responsibility
//! - Define canonical data structures used by the store and the editor service.
//! - Keep UI toolkits out of the model: documents are addressed by `DocumentKey`.
//!
//! # Invariants
//! - Documents are never deleted.
//! - Nothing in the model is persisted across process restarts.

pub mod document;
pub mod session;
