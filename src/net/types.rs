//! Wire types for the REST API.

use serde::{Deserialize, Serialize};

/// Authenticated user identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Sidebar summary of a persisted session, newest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Full persisted session as fetched on view mount.
#[derive(Clone, Debug, Deserialize)]
pub struct SessionDetail {
    pub id: String,
    #[serde(default)]
    pub messages: Vec<WireMessage>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

/// Persisted artifact record. The payload itself is JSON-encoded inside a
/// string field and parsed by the caller.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactRecord {
    pub serialized_payload: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest<'a> {
    pub owner: &'a str,
    pub title: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreatedSession {
    pub id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest<'a> {
    pub raw_text: &'a str,
    pub session_id: &'a str,
}
