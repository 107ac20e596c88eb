//! Build-time configuration.
//!
//! Values are baked in from the build environment; there is no runtime
//! config surface in the browser.

/// Google OAuth client identifier for the sign-in widget.
pub fn google_client_id() -> &'static str {
    option_env!("GOOGLE_SIGNIN_CLIENT_ID").unwrap_or("")
}

/// Base URL every REST call is joined against.
pub fn api_base() -> &'static str {
    option_env!("ADMIN_API_BASE").unwrap_or("/api")
}
