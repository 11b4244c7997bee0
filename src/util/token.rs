//! Auth token persistence.
//!
//! The bearer token lives in `localStorage` so a reload stays signed in.
//! Requires a browser environment; on the server every read comes back
//! empty and writes are dropped.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "slidechat_token";

/// Read the stored token, if any.
#[must_use]
pub fn read() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok().flatten()?;
        storage.get_item(STORAGE_KEY).ok().flatten().filter(|t| !t.is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist a freshly issued token.
pub fn store(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, token);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Drop the stored token on sign-out or rejection.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.remove_item(STORAGE_KEY);
            }
        }
    }
}
