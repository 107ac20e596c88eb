//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped collection state and delegates row
//! rendering to `components`.

pub mod home;
pub mod privacy_policy;
pub mod property;
pub mod sign_in;
pub mod users;
