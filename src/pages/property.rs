//! Property detail page: the unit table for one property.
//!
//! The page is solely responsible for its collection; rows report successful
//! creates and deletes through callbacks and this page folds them in.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::loading::Loading;
use crate::components::unit_row::UnitRow;
use crate::net::types::Unit;
use crate::state::units::{UnitsEvent, UnitsState, apply};

#[component]
pub fn PropertyPage() -> impl IntoView {
    let params = use_params_map();
    let property_id = move || params.get().get("id").unwrap_or_default();

    let state = RwSignal::new(UnitsState::default());
    let dispatch = move |event: UnitsEvent| state.update(|s| apply(s, event));

    // Fetch units and the property reference list on mount; the table stays
    // in its loading placeholder until both have landed.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let units = crate::net::api::list_units().await;
        let properties = crate::net::api::list_properties().await;
        match (units, properties) {
            (Ok(units), Ok(properties)) => dispatch(UnitsEvent::Loaded { units, properties }),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("unit list failed: {err}");
                dispatch(UnitsEvent::LoadFailed);
            }
        }
    });

    let on_add = Callback::new(move |unit: Unit| dispatch(UnitsEvent::UnitAdded(unit)));
    let on_remove = Callback::new(move |id: String| dispatch(UnitsEvent::UnitRemoved(id)));

    view! {
        <div class="card">
            <div class="card-body">
                <h2 class="card-title">"Units"</h2>
                <Show when=move || !state.get().loading fallback=|| view! { <Loading/> }>
                    <table class="table">
                        <thead>
                            <tr>
                                <th scope="col">"Name"</th>
                                <th scope="col">"Property"</th>
                                <th scope="col">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let UnitsState { units, properties, .. } = state.get();
                                units
                                    .into_iter()
                                    .map(|unit| {
                                        view! {
                                            <UnitRow
                                                id=unit.id
                                                name=unit.name
                                                property_id=unit.property_id
                                                properties=properties.clone()
                                                on_add=on_add
                                                on_remove=on_remove
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                            {move || {
                                view! {
                                    <UnitRow
                                        name=String::new()
                                        property_id=property_id()
                                        properties=state.get().properties
                                        on_add=on_add
                                        on_remove=on_remove
                                    />
                                }
                            }}
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}
