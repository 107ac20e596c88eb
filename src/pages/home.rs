//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-body">
                <h2 class="card-title">"Home"</h2>
                <p>"Manage accounts and units from the links below."</p>
                <ul>
                    <li>
                        <a href="/users">"Users"</a>
                    </li>
                    <li>
                        <a href="/sign-in">"Sign In"</a>
                    </li>
                    <li>
                        <a href="/privacy-policy">"Privacy Policy"</a>
                    </li>
                </ul>
            </div>
        </div>
    }
}
