//! Property-detail page state: units plus the property reference list.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use crate::net::types::{Property, Unit};

/// State backing the unit table on a property-detail page.
#[derive(Clone, Debug)]
pub struct UnitsState {
    pub units: Vec<Unit>,
    /// Read-only reference data for the row dropdowns.
    pub properties: Vec<Property>,
    pub loading: bool,
}

impl Default for UnitsState {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            properties: Vec::new(),
            loading: true,
        }
    }
}

/// One state transition per network outcome or row callback.
#[derive(Clone, Debug)]
pub enum UnitsEvent {
    Loaded {
        units: Vec<Unit>,
        properties: Vec<Property>,
    },
    LoadFailed,
    /// A row's create succeeded; the server-assigned entity joins the list.
    UnitAdded(Unit),
    /// A row's delete succeeded; the parent drops the record by id.
    UnitRemoved(String),
}

/// Fold one event into the state.
pub fn apply(state: &mut UnitsState, event: UnitsEvent) {
    match event {
        UnitsEvent::Loaded { units, properties } => {
            state.units = units;
            state.properties = properties;
            state.loading = false;
        }
        UnitsEvent::LoadFailed => {}
        UnitsEvent::UnitAdded(unit) => state.units.push(unit),
        UnitsEvent::UnitRemoved(id) => state.units.retain(|u| u.id != id),
    }
}
