//! Flutter bridge surface for the Inkpad editor core.

pub mod api;
