use super::*;

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(endpoint("users"), "/api/users");
}

#[test]
fn users_delete_endpoint_percent_encodes_reserved_characters_once() {
    assert_eq!(
        users_delete_endpoint("a+b@example.com"),
        "/api/users/a%2Bb%40example.com"
    );
}

#[test]
fn users_delete_endpoint_leaves_unreserved_characters_alone() {
    assert_eq!(
        users_delete_endpoint("user.name-1@x.com"),
        "/api/users/user.name-1%40x.com"
    );
}

#[test]
fn unit_endpoint_appends_id() {
    assert_eq!(unit_endpoint("u1"), "/api/units/u1");
}

#[test]
fn create_user_payload_carries_email_only() {
    assert_eq!(
        create_user_payload("a@x.com"),
        serde_json::json!({ "email": "a@x.com" })
    );
}

#[test]
fn create_unit_payload_carries_name_and_property_id() {
    assert_eq!(
        create_unit_payload("Unit1", "p1"),
        serde_json::json!({ "name": "Unit1", "propertyId": "p1" })
    );
}
