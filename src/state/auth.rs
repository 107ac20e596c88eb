//! Cosmetic sign-in state for the current browser session.
//!
//! Nothing reads this for authorization: no token is stored, no route is
//! guarded, and no request attaches credentials.

/// Identity reported by the sign-in widget, if any.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub signed_in_email: Option<String>,
}
