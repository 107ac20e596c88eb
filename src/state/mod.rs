//! Shared page state and reducer events.
//!
//! DESIGN
//! ======
//! Each network outcome is folded into page state through exactly one event,
//! so overlapping in-flight requests can only interleave at event
//! granularity. The last response to resolve still wins; nothing cancels or
//! supersedes an older request.

pub mod auth;
pub mod units;
pub mod users;
