//! Cross-cutting UI helpers.

pub mod auth;
