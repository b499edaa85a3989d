//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data wrapped in `RwSignal`s provided from the app root, so
//! individual components can depend on small focused models.

pub mod auth;
