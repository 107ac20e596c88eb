//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render rows and widgets while the owning page keeps the
//! canonical collection; rows report mutations through injected callbacks.

pub mod google_signin;
pub mod loading;
pub mod unit_row;
