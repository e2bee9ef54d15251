//! REST API helpers for communicating with the platform master.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `Unavailable`/`None` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `ApiError` instead of panicking. A response with
//! no payload is `Ok(None)`, not an error; callers skip the update and wait
//! for the next poll.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::de::DeserializeOwned;

use super::types::{Agent, Credentials, PlatformInfo, User};
#[cfg(any(test, feature = "hydrate"))]
use crate::config::API_BASE;

/// Failure talking to the REST API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
const INFO_PATH: &str = "/info";
#[cfg(any(test, feature = "hydrate"))]
const CURRENT_USER_PATH: &str = "/users/me";
#[cfg(any(test, feature = "hydrate"))]
const USERS_PATH: &str = "/users";
#[cfg(any(test, feature = "hydrate"))]
const AGENTS_PATH: &str = "/agents";
#[cfg(any(test, feature = "hydrate"))]
const LOGIN_PATH: &str = "/login";
#[cfg(any(test, feature = "hydrate"))]
const LOGOUT_PATH: &str = "/logout";

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Decode a body that may legitimately be empty or `null`.
#[cfg(any(test, feature = "hydrate"))]
fn decode_optional<T: DeserializeOwned>(body: &str) -> Result<Option<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<T>>(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    Ok(decode_optional::<Vec<T>>(body)?.unwrap_or_default())
}

#[cfg(feature = "hydrate")]
async fn get_text(path: &str) -> Result<String, ApiError> {
    let url = endpoint(path);
    let resp = gloo_net::http::Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status { endpoint: url, status: resp.status() });
    }
    resp.text().await.map_err(|e| ApiError::Transport(e.to_string()))
}

/// Fetch platform metadata from `GET /info`.
///
/// # Errors
///
/// Returns an error if the request fails, the server responds non-2xx, or the
/// body is not valid `PlatformInfo` JSON.
pub async fn fetch_info() -> Result<Option<PlatformInfo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(INFO_PATH).await?;
        decode_optional(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the currently authenticated user.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(CURRENT_USER_PATH).await.ok()?;
        decode_optional(&body).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch all user accounts.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(USERS_PATH).await?;
        decode_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all agents with their slot occupancy.
///
/// # Errors
///
/// Returns an error if the request or decoding fails.
pub async fn fetch_agents() -> Result<Vec<Agent>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = get_text(AGENTS_PATH).await?;
        decode_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Start a session via `POST /login`.
///
/// # Errors
///
/// Returns an error if the request fails or the credentials are rejected.
pub async fn login(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = endpoint(LOGIN_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status { endpoint: url, status: resp.status() });
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// End the current session via `POST /logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post(&endpoint(LOGOUT_PATH)).send().await;
    }
}
