//! Core use-case services.
//!
//! # Responsibility
//! - Turn front-end events into store/session mutations.
//! - Keep UI/FFI layers decoupled from state-holder details.

pub mod editor_service;
