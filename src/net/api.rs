//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, joined against the
//! configured base URL with `Accept: application/json` on every request.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers log failures and stop.
//! No retry, no timeout, no cancellation of superseded requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
#[cfg(any(test, feature = "hydrate"))]
use percent_encoding::utf8_percent_encode;
use thiserror::Error;

use super::types::{Property, Unit, User};
#[cfg(feature = "hydrate")]
use super::types::{CreateUnitResponse, PropertiesResponse, UnitsResponse, UsersDeleteResponse, UsersResponse};

/// Escape set matching `encodeURIComponent`: everything except alphanumerics
/// and `- _ . ! ~ * ' ( )`.
pub(crate) const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A failed REST call. The three variants collapse into the same
/// log-and-stop handling in pages; the split exists so logs say which
/// layer gave out.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response body: {0}")]
    Decode(String),
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}/{path}", crate::config::api_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn users_delete_endpoint(email: &str) -> String {
    format!("{}/{}", endpoint("users"), utf8_percent_encode(email, URI_COMPONENT))
}

#[cfg(any(test, feature = "hydrate"))]
fn unit_endpoint(id: &str) -> String {
    format!("{}/{id}", endpoint("units"))
}

#[cfg(any(test, feature = "hydrate"))]
fn create_user_payload(email: &str) -> serde_json::Value {
    serde_json::json!({ "email": email })
}

#[cfg(any(test, feature = "hydrate"))]
fn create_unit_payload(name: &str, property_id: &str) -> serde_json::Value {
    serde_json::json!({ "name": name, "propertyId": property_id })
}

/// Fetch the full user collection via `GET /users`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("users"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: UsersResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a user via `POST /users` and return the refreshed collection.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn create_user(email: &str) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("users"))
            .header("Accept", "application/json")
            .json(&create_user_payload(email))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: UsersResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete a user via `DELETE /users/{email}`, percent-encoding the email
/// exactly once. The refreshed collection is optional in the response.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn delete_user(email: &str) -> Result<Option<Vec<User>>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&users_delete_endpoint(email))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: UsersDeleteResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.users)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the unit collection via `GET /units`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn list_units() -> Result<Vec<Unit>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("units"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: UnitsResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.units)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create a unit via `POST /units` and return the server-assigned entity.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn create_unit(name: &str, property_id: &str) -> Result<Unit, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("units"))
            .header("Accept", "application/json")
            .json(&create_unit_payload(name, property_id))
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: CreateUnitResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.entity)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, property_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Delete a unit via `DELETE /units/{id}`. Success is HTTP 200; the body is
/// ignored.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure or a non-200 status.
pub async fn delete_unit(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&unit_endpoint(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.status() == 200 {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the property reference list via `GET /properties`.
///
/// # Errors
///
/// Returns an `ApiError` on transport failure, non-2xx status, or an
/// undecodable body.
pub async fn list_properties() -> Result<Vec<Property>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("properties"))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: PropertiesResponse = resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.properties)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
