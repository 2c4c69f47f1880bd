//! REST API helpers for the school-portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every request
//! targets the fixed base address and carries the session cookie
//! (`credentials: include`) without caller action. No retry, no timeout.
//! Server-side (SSR): stubs reporting a transport failure, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<User, AuthCheckError>`. The variants keep "denied",
//! "transport" and "malformed body" apart so callers and tests can simulate
//! each outcome deterministically; the session gate collapses every failure
//! to the signed-out state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginData, RegisterData, User};

/// Fixed backend base address. Not environment-overridable.
pub const API_BASE: &str = "http://127.0.0.1:8000/api";

/// Join a path (starting with `/`) onto the backend base address.
pub fn endpoint(path: &str) -> String {
    format!("{API_BASE}{path}")
}

/// Why a session-establishing request failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthCheckError {
    /// The server answered with a non-success status.
    Denied(u16),
    /// The request never completed (network error, server unreachable).
    Transport(String),
    /// The response body did not deserialize into the expected shape.
    Malformed(String),
}

impl std::fmt::Display for AuthCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denied(status) => write!(f, "request denied with status {status}"),
            Self::Transport(msg) => write!(f, "transport failure: {msg}"),
            Self::Malformed(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for AuthCheckError {}

/// GET a JSON payload from the backend with the session cookie attached.
#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, AuthCheckError> {
    let resp = gloo_net::http::Request::get(&endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| AuthCheckError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(AuthCheckError::Denied(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| AuthCheckError::Malformed(e.to_string()))
}

/// POST a JSON body to the backend with the session cookie attached.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, AuthCheckError> {
    let resp = gloo_net::http::Request::post(&endpoint(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(|e| AuthCheckError::Malformed(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthCheckError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(AuthCheckError::Denied(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| AuthCheckError::Malformed(e.to_string()))
}

/// Fetch the current session's user via `GET /auth/user/`.
///
/// One shot, no retry. A visitor without a session and an unreachable
/// server both surface as errors here; the gate treats them alike.
pub async fn fetch_session_user() -> Result<User, AuthCheckError> {
    #[cfg(feature = "hydrate")]
    {
        let outcome = get_json::<User>("/auth/user/").await;
        if let Err(err) = &outcome {
            log::debug!("session check failed: {err}");
        }
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthCheckError::Transport("not available on server".to_owned()))
    }
}

/// Log in via `POST /auth/login/`. On success the server sets the session
/// cookie and the body carries the signed-in [`User`].
pub async fn login(data: &LoginData) -> Result<User, AuthCheckError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<User>("/auth/login/", data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(AuthCheckError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via `POST /auth/register/`. The server logs the new
/// account in immediately, so success yields a live session.
pub async fn register(data: &RegisterData) -> Result<User, AuthCheckError> {
    #[cfg(feature = "hydrate")]
    {
        post_json::<User>("/auth/register/", data).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(AuthCheckError::Transport("not available on server".to_owned()))
    }
}
