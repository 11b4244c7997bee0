//! Shared client-side state modules.
//!
//! State is split by domain (`auth`, `chat`, `sessions`) so individual
//! components can depend on small focused models. Everything here is plain
//! data wrapped in `RwSignal`s at the app root; the modules themselves are
//! browser-free and natively tested.

pub mod auth;
pub mod chat;
pub mod sessions;
