//! Table row for a unit: either an editable draft or a persisted record.
//!
//! DESIGN
//! ======
//! The mode is fixed when the row is constructed; a persisted row never
//! becomes a draft again and there is no in-place editing. Rows issue their
//! own create/delete calls but never touch the parent's collection: the
//! injected callbacks are the only channel back up.

#[cfg(test)]
#[path = "unit_row_test.rs"]
mod unit_row_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Property, Unit};

/// Row mode, decided once from whether a server id was supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
enum RowMode {
    New,
    Exists { id: String },
}

impl RowMode {
    fn from_id(id: Option<String>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Self::Exists { id },
            _ => Self::New,
        }
    }
}

/// Both draft fields must be non-empty before a create is issued.
fn validate_draft(name: &str, property_id: &str) -> Result<(), &'static str> {
    if name.is_empty() || property_id.is_empty() {
        return Err("name and property are required");
    }
    Ok(())
}

/// Resolve a property's display name by id against the reference list.
fn resolve_property_name<'a>(properties: &'a [Property], id: &str) -> Option<&'a str> {
    properties.iter().find(|p| p.id == id).map(|p| p.name.as_str())
}

/// A unit table row. Without an `id` it renders the editable draft row;
/// with one it renders the read-only persisted row.
#[component]
pub fn UnitRow(
    #[prop(into, optional)] id: Option<String>,
    name: String,
    property_id: String,
    properties: Vec<Property>,
    on_add: Callback<Unit>,
    on_remove: Callback<String>,
) -> impl IntoView {
    match RowMode::from_id(id) {
        RowMode::New => view! {
            <NewUnitRow name=name property_id=property_id properties=properties on_add=on_add/>
        }
        .into_any(),
        RowMode::Exists { id } => view! {
            <ExistingUnitRow
                id=id
                name=name
                property_id=property_id
                properties=properties
                on_remove=on_remove
            />
        }
        .into_any(),
    }
}

/// Editable draft row: name input, property select, Create button.
#[component]
fn NewUnitRow(
    name: String,
    property_id: String,
    properties: Vec<Property>,
    on_add: Callback<Unit>,
) -> impl IntoView {
    let initial_name = name.clone();
    let initial_property = property_id.clone();
    let draft_name = RwSignal::new(name);
    let draft_property = RwSignal::new(property_id);
    let fields_enabled = RwSignal::new(true);

    let submit = Callback::new(move |()| {
        let name_value = draft_name.get_untracked();
        let property_value = draft_property.get_untracked();
        if validate_draft(&name_value, &property_value).is_err() {
            return;
        }
        fields_enabled.set(false);
        #[cfg(feature = "hydrate")]
        {
            let initial_name = initial_name.clone();
            let initial_property = initial_property.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_unit(&name_value, &property_value).await {
                    Ok(entity) => {
                        on_add.run(entity);
                        draft_name.set(initial_name);
                        draft_property.set(initial_property);
                        fields_enabled.set(true);
                    }
                    Err(err) => {
                        log::warn!("unit create failed: {err}");
                        fields_enabled.set(true);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&initial_name, &initial_property, name_value, property_value, on_add);
        }
    });

    let initial_selected = draft_property.get_untracked();
    view! {
        <tr class="unit-row unit-row--new">
            <th scope="row">
                <input
                    class="form-control"
                    type="text"
                    placeholder="Name"
                    prop:value=move || draft_name.get()
                    disabled=move || !fields_enabled.get()
                    on:input=move |ev| draft_name.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </th>
            <td>
                <select
                    class="form-control"
                    disabled=move || !fields_enabled.get()
                    on:change=move |ev| draft_property.set(event_target_value(&ev))
                >
                    <option value="">""</option>
                    {properties
                        .into_iter()
                        .map(|p| {
                            let selected = p.id == initial_selected;
                            view! {
                                <option value=p.id selected=selected>{p.name}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </td>
            <td>
                <button
                    class="btn"
                    disabled=move || !fields_enabled.get()
                    on:click=move |_| submit.run(())
                >
                    "Create"
                </button>
            </td>
        </tr>
    }
}

/// Read-only persisted row: name link, resolved property name, Delete button.
#[component]
fn ExistingUnitRow(
    id: String,
    name: String,
    property_id: String,
    properties: Vec<Property>,
    on_remove: Callback<String>,
) -> impl IntoView {
    let navigate = use_navigate();
    let detail_id = id.clone();
    let on_name_click = move |_| {
        navigate(&format!("/units/{detail_id}"), NavigateOptions::default());
    };

    let property_name = resolve_property_name(&properties, &property_id)
        .unwrap_or_default()
        .to_owned();

    let delete_id = id;
    let on_delete = move |_| {
        let id = delete_id.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_unit(&id).await {
                Ok(()) => on_remove.run(id),
                Err(err) => log::warn!("unit delete failed: {err}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (id, on_remove);
    };

    view! {
        <tr class="unit-row">
            <th scope="row">
                <button class="btn btn--link" on:click=on_name_click>{name}</button>
            </th>
            <td>{property_name}</td>
            <td>
                <button class="btn" on:click=on_delete>"Delete"</button>
            </td>
        </tr>
    }
}
