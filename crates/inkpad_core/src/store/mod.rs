//! Memory-resident state holders.
//!
//! # Invariants
//! - State lives for the process only; there is no persistence layer.

pub mod document_store;
