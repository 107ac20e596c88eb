//! Wire schema shared with the REST backend.
//!
//! Collection endpoints wrap their payload in a single PascalCase field
//! (`Users`, `Units`, `Properties`); unit and property records themselves
//! use camelCase fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An admin account allowed to sign in to the console. Keyed by email.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "CreatedBy")]
    pub created_by: String,
}

/// Response shape for `GET /users` and `POST /users`.
#[derive(Debug, Deserialize)]
pub struct UsersResponse {
    #[serde(rename = "Users")]
    pub users: Vec<User>,
}

/// Response shape for `DELETE /users/{email}`.
///
/// Unlike list and create, the refreshed collection is optional here.
#[derive(Debug, Deserialize)]
pub struct UsersDeleteResponse {
    #[serde(rename = "Users", default)]
    pub users: Option<Vec<User>>,
}

/// A rentable unit belonging to a property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub name: String,
    pub property_id: String,
    pub updated_by: String,
}

/// Response shape for `POST /units`.
#[derive(Debug, Deserialize)]
pub struct CreateUnitResponse {
    pub entity: Unit,
}

/// Response shape for `GET /units`.
#[derive(Debug, Deserialize)]
pub struct UnitsResponse {
    #[serde(rename = "Units")]
    pub units: Vec<Unit>,
}

/// Read-only reference data: a property a unit can belong to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub created_by: String,
}

/// Response shape for `GET /properties`.
#[derive(Debug, Deserialize)]
pub struct PropertiesResponse {
    #[serde(rename = "Properties")]
    pub properties: Vec<Property>,
}
