//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (input handling, store calls,
//! navigation) and reads shared state from context.

pub mod home;
pub mod login;
pub mod register;
