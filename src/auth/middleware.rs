// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route-level authentication middleware.
//!
//! Applied to the protected `/api` subtree. Authenticates the request via
//! [`crate::auth::Authenticator`] and attaches the resulting
//! [`AuthenticatedUser`] to the request extensions, where handlers pick it up
//! through the [`crate::auth::Auth`] extractor. Any failure is answered with
//! the uniform unauthenticated response before the handler runs.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::extractor::Authenticator;
use crate::state::AppState;

/// Authenticate the request or reject it with a 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    match state.auth.authenticate(request.headers()).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(rejection) => rejection.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::AuthenticatedUser;
    use crate::auth::codec::TokenCodec;
    use crate::auth::password::hash_password;
    use crate::store::{InMemoryStore, User};
    use axum::{
        body::Body, http::Request as HttpRequest, http::StatusCode, middleware, routing::get,
        Json, Router,
    };
    use chrono::Duration;
    use tower::ServiceExt;
    use uuid::Uuid;

    const TEST_SECRET: &[u8] = b"middleware-test-secret";

    async fn whoami(axum::Extension(user): axum::Extension<AuthenticatedUser>) -> Json<Uuid> {
        Json(user.user_id)
    }

    fn test_app() -> (Router, AppState, Uuid) {
        let mut store = InMemoryStore::new();
        let user = User {
            user_id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password_hash: hash_password("pw").unwrap(),
            phone: None,
        };
        let user_id = user.user_id;
        store.insert_user(user).unwrap();

        let state = AppState::new(store, TokenCodec::new(TEST_SECRET, Duration::hours(2)));
        let app = Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            ))
            .with_state(state.clone());
        (app, state, user_id)
    }

    #[tokio::test]
    async fn valid_token_reaches_the_handler() {
        let (app, state, user_id) = test_app();
        let token = state.auth.codec().issue(user_id).unwrap();

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let id: Uuid = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(id, user_id);
    }

    #[tokio::test]
    async fn missing_token_is_rejected_before_the_handler() {
        let (app, _state, _user_id) = test_app();

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let (app, _state, user_id) = test_app();
        let stale = TokenCodec::new(TEST_SECRET, Duration::seconds(-10));
        let token = stale.issue(user_id).unwrap();

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn foreign_key_token_is_rejected() {
        let (app, _state, user_id) = test_app();
        let foreign = TokenCodec::new(b"wrong-secret", Duration::hours(2));
        let token = foreign.issue(user_id).unwrap();

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
