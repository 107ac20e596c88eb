use super::*;

fn property(id: &str, name: &str) -> Property {
    Property {
        id: id.to_owned(),
        name: name.to_owned(),
        created_by: "root".to_owned(),
    }
}

#[test]
fn row_mode_without_id_is_new() {
    assert_eq!(RowMode::from_id(None), RowMode::New);
}

#[test]
fn row_mode_with_empty_id_is_new() {
    assert_eq!(RowMode::from_id(Some(String::new())), RowMode::New);
}

#[test]
fn row_mode_with_id_is_exists() {
    assert_eq!(
        RowMode::from_id(Some("u1".to_owned())),
        RowMode::Exists { id: "u1".to_owned() }
    );
}

#[test]
fn validate_draft_requires_both_fields() {
    assert!(validate_draft("Unit1", "p1").is_ok());
    assert!(validate_draft("", "p1").is_err());
    assert!(validate_draft("Unit1", "").is_err());
    assert!(validate_draft("", "").is_err());
}

#[test]
fn resolve_property_name_matches_by_id() {
    let properties = vec![property("p1", "Main St"), property("p2", "Oak Ave")];
    assert_eq!(resolve_property_name(&properties, "p2"), Some("Oak Ave"));
}

#[test]
fn resolve_property_name_missing_id_is_none() {
    let properties = vec![property("p1", "Main St")];
    assert_eq!(resolve_property_name(&properties, "p9"), None);
}
