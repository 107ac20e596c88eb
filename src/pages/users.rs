//! Users page: the admin account list with create and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The collection is fetched once on mount and replaced wholesale from each
//! mutation response; every transition goes through a `UsersEvent` so the
//! view never mutates state directly.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::state::users::{UsersEvent, UsersState, apply};

#[component]
pub fn UsersPage() -> impl IntoView {
    let state = RwSignal::new(UsersState::default());
    let dispatch = move |event: UsersEvent| state.update(|s| apply(s, event));

    // Initial collection fetch. Failures log and stop; no retry.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::list_users().await {
            Ok(users) => dispatch(UsersEvent::ListLoaded(users)),
            Err(err) => {
                log::warn!("user list failed: {err}");
                dispatch(UsersEvent::ListFailed);
            }
        }
    });

    let on_delete = Callback::new(move |email: String| {
        dispatch(UsersEvent::DeleteStarted);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_user(&email).await {
                Ok(users) => dispatch(UsersEvent::DeleteCompleted(users)),
                Err(err) => {
                    log::warn!("user delete failed: {err}");
                    dispatch(UsersEvent::DeleteFailed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = email;
    });

    let on_create = Callback::new(move |()| {
        if !state.get_untracked().submit_enabled {
            return;
        }
        let draft = state.get_untracked().draft.clone();
        dispatch(UsersEvent::CreateStarted);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_user(&draft).await {
                Ok(users) => dispatch(UsersEvent::CreateCompleted(users)),
                Err(err) => {
                    log::warn!("user create failed: {err}");
                    dispatch(UsersEvent::CreateFailed);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = draft;
    });

    view! {
        <div class="card">
            <div class="card-body">
                <h2 class="card-title">"Users"</h2>
                <Show when=move || !state.get().loading fallback=|| view! { <Loading/> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th scope="col">"Email Address"</th>
                                <th scope="col">"Created By"</th>
                                <th scope="col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                state
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|user| {
                                        let email = user.email.clone();
                                        view! {
                                            <tr>
                                                <th scope="row">{user.email}</th>
                                                <td>{user.created_by}</td>
                                                <td>
                                                    <button
                                                        class="btn"
                                                        on:click=move |_| on_delete.run(email.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            <tr>
                                <th scope="row">
                                    <input
                                        class="form-control"
                                        type="text"
                                        placeholder="Enter new user's Google email address"
                                        prop:value=move || state.get().draft
                                        disabled=move || !state.get().field_enabled
                                        on:input=move |ev| {
                                            dispatch(UsersEvent::DraftEdited(event_target_value(&ev)));
                                        }
                                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                            if ev.key() == "Enter" {
                                                ev.prevent_default();
                                                on_create.run(());
                                            }
                                        }
                                    />
                                </th>
                                <td></td>
                                <td>
                                    <button
                                        class="btn"
                                        disabled=move || !state.get().submit_enabled
                                        on:click=move |_| on_create.run(())
                                    >
                                        "Create"
                                    </button>
                                </td>
                            </tr>
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
