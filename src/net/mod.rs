//! Networking modules for the portal REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the transport seam and its HTTP implementation, `types`
//! defines the shared wire schema.

pub mod api;
pub mod types;
