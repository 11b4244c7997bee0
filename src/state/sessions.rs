#[cfg(test)]
#[path = "sessions_test.rs"]
mod sessions_test;

use crate::net::types::SessionSummary;

/// Sidebar session list.
///
/// `revision` is bumped after lazy session creation so the sidebar refetches
/// without the chat view holding a reference to it.
#[derive(Clone, Debug, Default)]
pub struct SessionsState {
    pub items: Vec<SessionSummary>,
    pub loading: bool,
    pub revision: u64,
}

impl SessionsState {
    /// Request a refetch.
    pub fn bump(&mut self) {
        self.revision += 1;
    }

    /// Replace the list, most recently updated first.
    pub fn set_items(&mut self, mut items: Vec<SessionSummary>) {
        items.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self.items = items;
        self.loading = false;
    }
}
