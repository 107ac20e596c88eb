//! Sign-in page delegating to the Google identity widget.
//!
//! Authentication here is cosmetic: outcomes are logged, the email lands in
//! `AuthState`, and nothing else consumes either. No token is stored and no
//! route is protected.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::google_signin::GoogleSignIn;
use crate::state::auth::AuthState;

/// Outcome parsed from the provider's redirect-back query string.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SignInOutcome {
    Success { email: String },
    Failure { reason: String },
    Pending,
}

/// Interpret the query params the provider appends when redirecting back.
/// An `error` param wins over anything else.
fn parse_outcome(email: Option<String>, error: Option<String>) -> SignInOutcome {
    match (email, error) {
        (_, Some(reason)) => SignInOutcome::Failure { reason },
        (Some(email), None) if !email.is_empty() => SignInOutcome::Success { email },
        _ => SignInOutcome::Pending,
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();

    Effect::new(move || {
        let q = query.get();
        match parse_outcome(q.get("email"), q.get("error")) {
            SignInOutcome::Success { email } => {
                log::info!("sign-in succeeded for {email}");
                auth.update(|a| a.signed_in_email = Some(email));
            }
            SignInOutcome::Failure { reason } => log::info!("sign-in failed: {reason}"),
            SignInOutcome::Pending => {}
        }
    });

    view! {
        <div>
            <h2>"Sign In"</h2>
            <br/>
            <GoogleSignIn/>
        </div>
    }
}
