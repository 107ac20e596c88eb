//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and `types` defines the wire schema shared
//! with the server.

pub mod api;
pub mod types;
