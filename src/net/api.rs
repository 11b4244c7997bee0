//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying the
//! bearer token. Server-side (SSR): stubs returning errors/`None` since
//! these endpoints are only meaningful in the browser.
//!
//! A 401 from any endpoint maps to [`ApiError::Auth`], which callers treat
//! as fatal to the view; everything else degrades the single operation.

#![allow(clippy::unused_async)]

use artifact::payload::SlideData;

use super::ApiError;
use super::types::{CreatedSession, SessionDetail, SessionSummary, User};

#[cfg(feature = "hydrate")]
fn auth_header() -> Result<String, ApiError> {
    crate::util::token::read()
        .map(|token| format!("Bearer {token}"))
        .ok_or(ApiError::Auth)
}

#[cfg(feature = "hydrate")]
fn check(resp: &gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.status() == 401 {
        return Err(ApiError::Auth);
    }
    if !resp.ok() {
        return Err(ApiError::Http(resp.status()));
    }
    Ok(())
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(url)
        .header("Authorization", &auth_header()?)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(&resp)?;
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    url: &str,
    body: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .header("Authorization", &auth_header()?)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check(&resp)?;
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
pub async fn login(email: &str, password: &str) -> Result<String, ApiError> {
    credentials_request("/api/auth/login", email, password).await
}

/// Create an account and get a bearer token via `POST /api/auth/register`.
pub async fn register(email: &str, password: &str) -> Result<String, ApiError> {
    credentials_request("/api/auth/register", email, password).await
}

async fn credentials_request(url: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(url)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(&resp)?;
        let body: super::types::LoginResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(body.token)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (url, email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Verify the stored token and fetch the current user from `/api/auth/me`.
pub async fn fetch_me() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the owner's sessions, ordered by recency on the server.
pub async fn fetch_sessions(owner: &str) -> Result<Vec<SessionSummary>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/sessions?owner={owner}");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = owner;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a session via `POST /api/sessions`. The identifier is assigned by
/// the server, never locally.
pub async fn create_session(owner: &str, title: &str) -> Result<CreatedSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/sessions",
            &super::types::CreateSessionRequest { owner, title },
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (owner, title);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch a persisted session with its message history.
pub async fn fetch_session(id: &str) -> Result<SessionDetail, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/sessions/{id}");
        get_json(&url).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Run a generation request for the given session.
pub async fn generate(raw_text: &str, session_id: &str) -> Result<SlideData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/api/generate",
            &super::types::GenerateRequest { raw_text, session_id },
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (raw_text, session_id);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Resolve a persisted artifact by identifier. Returns `None` on any
/// failure so one broken history item never aborts its siblings; the
/// failure is logged and the message degrades to plain text.
pub async fn fetch_artifact(id: &str) -> Option<SlideData> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/artifacts/{id}");
        let record: super::types::ArtifactRecord = match get_json(&url).await {
            Ok(record) => record,
            Err(e) => {
                leptos::logging::warn!("artifact {id} lookup failed: {e}");
                return None;
            }
        };
        match serde_json::from_str(&record.serialized_payload) {
            Ok(data) => Some(data),
            Err(e) => {
                leptos::logging::warn!("artifact {id} payload unreadable: {e}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}
