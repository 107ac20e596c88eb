//! Static privacy policy page.

use leptos::prelude::*;

#[component]
pub fn PrivacyPolicyPage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <h2 class="card-title">"Privacy Policy"</h2>
                <p>
                    "Account emails are used solely to grant access to this console. "
                    "Nothing is shared with third parties."
                </p>
            </div>
        </div>
    }
}
