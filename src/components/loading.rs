//! Placeholder shown while a collection fetch is in flight.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <p class="loading">"Loading..."</p> }
}
