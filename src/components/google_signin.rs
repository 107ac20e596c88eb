//! Google sign-in button delegating to the hosted OAuth flow.
//!
//! The widget only hands the browser off to the provider; outcome handling
//! belongs to the caller and is cosmetic either way.

#[cfg(test)]
#[path = "google_signin_test.rs"]
mod google_signin_test;

use leptos::prelude::*;
use percent_encoding::utf8_percent_encode;

use crate::net::api::URI_COMPONENT;

const AUTHORIZE_BASE: &str = "https://accounts.google.com/o/oauth2/v2/auth";

/// Build the authorize URL for the hosted Google sign-in flow.
fn authorize_url(client_id: &str) -> String {
    format!(
        "{AUTHORIZE_BASE}?client_id={}&response_type=code&scope=openid%20email",
        utf8_percent_encode(client_id, URI_COMPONENT)
    )
}

/// Button that hands the browser to Google's hosted sign-in page.
#[component]
pub fn GoogleSignIn() -> impl IntoView {
    let on_click = move |_| {
        let url = authorize_url(crate::config::google_client_id());
        log::info!("delegating sign-in to {url}");
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
    };

    view! {
        <button class="btn btn--google" on:click=on_click>
            "Sign in with Google"
        </button>
    }
}
