//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    home::HomePage, privacy_policy::PrivacyPolicyPage, property::PropertyPage,
    sign_in::SignInPage, users::UsersPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts and sets up client-side routing. First
/// matching path wins; unknown paths fall through to the not-found text.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/lockadmin.css"/>
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <Route path=StaticSegment("privacy-policy") view=PrivacyPolicyPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=(StaticSegment("properties"), ParamSegment("id")) view=PropertyPage/>
            </Routes>
        </Router>
    }
}
