// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::{SessionAuthenticator, TokenCodec};
use crate::store::InMemoryStore;

/// Shared application state: the record store plus the authenticator built
/// around the process-wide token codec. Cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<InMemoryStore>>,
    pub auth: Arc<SessionAuthenticator>,
}

impl AppState {
    pub fn new(store: InMemoryStore, codec: TokenCodec) -> Self {
        let store = Arc::new(RwLock::new(store));
        let auth = Arc::new(SessionAuthenticator::new(codec, store.clone()));
        Self { store, auth }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn authenticator_shares_the_store() {
        let state = AppState::new(
            InMemoryStore::new(),
            TokenCodec::new(b"state-test-secret", Duration::hours(2)),
        );

        // Two handles, one store.
        assert_eq!(Arc::strong_count(&state.store), 2);
    }
}
