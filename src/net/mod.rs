//! Network layer: REST helpers and wire types.

pub mod api;
pub mod types;

use thiserror::Error;

/// Failure modes for API calls.
///
/// `Auth` is fatal to the current view (token missing or rejected) and
/// routes the user back to login; the other variants degrade a single
/// operation and leave the session usable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("not authenticated")]
    Auth,
    #[error("request failed with status {0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}
