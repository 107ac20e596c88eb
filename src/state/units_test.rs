use super::*;

fn unit(id: &str, name: &str) -> Unit {
    Unit {
        id: id.to_owned(),
        name: name.to_owned(),
        property_id: "p1".to_owned(),
        updated_by: "me".to_owned(),
    }
}

fn property(id: &str, name: &str) -> Property {
    Property {
        id: id.to_owned(),
        name: name.to_owned(),
        created_by: "root".to_owned(),
    }
}

#[test]
fn initial_state_is_loading_and_empty() {
    let state = UnitsState::default();
    assert!(state.loading);
    assert!(state.units.is_empty());
    assert!(state.properties.is_empty());
}

#[test]
fn loaded_sets_both_collections_and_clears_loading() {
    let mut state = UnitsState::default();
    apply(
        &mut state,
        UnitsEvent::Loaded {
            units: vec![unit("u1", "Unit1")],
            properties: vec![property("p1", "Main St")],
        },
    );
    assert!(!state.loading);
    assert_eq!(state.units.len(), 1);
    assert_eq!(state.properties.len(), 1);
}

#[test]
fn load_failed_changes_nothing() {
    let mut state = UnitsState::default();
    apply(&mut state, UnitsEvent::LoadFailed);
    assert!(state.loading);
}

#[test]
fn unit_added_appends_to_the_list() {
    let mut state = UnitsState::default();
    apply(
        &mut state,
        UnitsEvent::Loaded {
            units: vec![unit("u1", "Unit1")],
            properties: Vec::new(),
        },
    );
    apply(&mut state, UnitsEvent::UnitAdded(unit("u2", "Unit2")));
    let ids: Vec<&str> = state.units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
}

#[test]
fn unit_removed_drops_only_the_matching_id() {
    let mut state = UnitsState::default();
    apply(
        &mut state,
        UnitsEvent::Loaded {
            units: vec![unit("u1", "Unit1"), unit("u2", "Unit2")],
            properties: Vec::new(),
        },
    );
    apply(&mut state, UnitsEvent::UnitRemoved("u1".to_owned()));
    let ids: Vec<&str> = state.units.iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, vec!["u2"]);
}
