//! Application state management
//!
//! This module provides the shared application state that is passed to
//! all request handlers via Axum's state extraction. The store is an
//! explicitly injected capability, never a global handle: tests inject
//! [`crate::store::MemoryUserStore`], the binary injects
//! [`crate::store::PgUserStore`].

use crate::store::UserStore;
use std::sync::Arc;

/// Shared application state
///
/// Cloned per request; the only field is an `Arc`, so cloning is O(1).
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn UserStore>,
}

impl AppState {
    /// Create application state around the injected store capability.
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// The store capability handlers persist through.
    #[inline]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryUserStore;

    #[tokio::test]
    async fn test_state_clone_is_cheap_and_shares_the_store() {
        let state = AppState::new(Arc::new(MemoryUserStore::new()));
        let cloned = state.clone();

        // Both handles observe the same store.
        state.store().insert("alice").await.unwrap();
        let users = cloned.store().find_all().await.unwrap();
        assert_eq!(users.len(), 1);
    }
}
