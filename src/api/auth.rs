// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Registration and login endpoints.
//!
//! Both are the only unauthenticated API routes; on success each calls the
//! token codec exactly once to issue the caller's access token.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use uuid::Uuid;

use crate::auth::password::{hash_password, verify_password};
use crate::auth::ACCESS_TOKEN_COOKIE;
use crate::error::ApiError;
use crate::models::{AuthData, AuthResponse, LoginRequest, RegisterRequest};
use crate::state::AppState;
use crate::store::User;

fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    let required = [
        &request.first_name,
        &request.last_name,
        &request.email,
        &request.password,
    ];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(ApiError::bad_request("Registration unsuccessful"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::bad_request("Registration unsuccessful"));
    }
    Ok(())
}

/// Register a new user.
///
/// Stores a salted password digest, creates the user's default organisation
/// (`"{firstName}'s Organisation"`) with the user as its first member, and
/// issues an access token.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = AuthResponse),
        (status = 400, description = "Invalid registration payload"),
        (status = 422, description = "Email already registered"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    validate_registration(&request)?;

    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::internal(format!("Failed to hash password: {e}")))?;

    let user = User {
        user_id: Uuid::new_v4(),
        first_name: request.first_name.trim().to_string(),
        last_name: request.last_name.trim().to_string(),
        email: request.email.trim().to_string(),
        password_hash,
        phone: request.phone,
    };
    let user_id = user.user_id;
    let user_response = user.to_response();

    {
        let mut store = state.store.write().await;
        store.insert_user(user)?;
        store.create_organisation(
            format!("{}'s Organisation", user_response.first_name),
            None,
            vec![user_id],
        );
    }

    let access_token = state
        .auth
        .codec()
        .issue(user_id)
        .map_err(|_| ApiError::internal("Failed to issue access token"))?;

    tracing::info!(%user_id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            status: "success".to_string(),
            message: "Registration Successful".to_string(),
            data: AuthData {
                access_token,
                user: user_response,
            },
        }),
    ))
}

/// Log in with an email/password credential.
///
/// On success the access token is returned in the body and also set as the
/// `access-token` HttpOnly cookie. Unknown email and wrong password are
/// deliberately indistinguishable to the caller.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Authentication failed"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let unauthenticated = || ApiError::new(StatusCode::UNAUTHORIZED, "Authentication failed");

    let user = {
        let store = state.store.read().await;
        store.user_by_email(&request.email).cloned()
    }
    .ok_or_else(unauthenticated)?;

    let password_ok = verify_password(&request.password, &user.password_hash)
        .map_err(|e| ApiError::internal(format!("Password verification failed: {e}")))?;
    if !password_ok {
        tracing::debug!(email = %request.email, "login with wrong password");
        return Err(unauthenticated());
    }

    let access_token = state
        .auth
        .codec()
        .issue(user.user_id)
        .map_err(|_| ApiError::internal("Failed to issue access token"))?;

    let cookie = format!(
        "{ACCESS_TOKEN_COOKIE}={access_token}; HttpOnly; Path=/; Max-Age={}",
        state.auth.codec().ttl().num_seconds()
    );

    tracing::info!(user_id = %user.user_id, "user logged in");

    let body = Json(AuthResponse {
        status: "success".to_string(),
        message: "Login successful".to_string(),
        data: AuthData {
            access_token,
            user: user.to_response(),
        },
    });

    Ok(([(SET_COOKIE, cookie)], body).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenCodec;
    use crate::store::InMemoryStore;
    use chrono::Duration;

    const TEST_SECRET: &[u8] = b"auth-api-test-secret";

    fn test_state() -> AppState {
        AppState::new(
            InMemoryStore::new(),
            TokenCodec::new(TEST_SECRET, Duration::hours(2)),
        )
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: email.to_string(),
            password: "CorrectHorse9!".to_string(),
            phone: Some("0100000000".to_string()),
        }
    }

    #[tokio::test]
    async fn register_creates_user_default_org_and_token() {
        let state = test_state();

        let (status, Json(response)) = register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(response.status, "success");
        assert_eq!(response.data.user.email, "ada@example.com");

        // The issued token verifies and names the new user.
        let claims = state.auth.codec().verify(&response.data.access_token).unwrap();
        assert_eq!(claims.user_id, response.data.user.user_id.to_string());

        // Default organisation exists with the user as its only member.
        let store = state.store.read().await;
        let orgs = store.organisations_for_user(response.data.user.user_id);
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].name, "Ada's Organisation");
        assert_eq!(orgs[0].members.len(), 1);
    }

    #[tokio::test]
    async fn register_stores_digest_not_plaintext() {
        let state = test_state();
        register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap();

        let store = state.store.read().await;
        let user = store.user_by_email("ada@example.com").unwrap();
        assert!(user.password_hash.starts_with("$argon2id$"));
        assert!(!user.password_hash.contains("CorrectHorse9!"));
    }

    #[tokio::test]
    async fn register_rejects_blank_fields_and_duplicate_email() {
        let state = test_state();

        let mut blank = register_request("ada@example.com");
        blank.first_name = "  ".to_string();
        let err = register(State(state.clone()), Json(blank)).await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);

        register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap();
        let err = register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap_err();
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn login_succeeds_and_sets_cookie() {
        let state = test_state();
        register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap();

        let response = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let cookie = response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cookie.starts_with("access-token="));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=7200"));
    }

    #[tokio::test]
    async fn login_failures_are_indistinguishable() {
        let state = test_state();
        register(
            State(state.clone()),
            Json(register_request("ada@example.com")),
        )
        .await
        .unwrap();

        let unknown = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "CorrectHorse9!".to_string(),
            }),
        )
        .await
        .unwrap_err();

        let wrong_password = login(
            State(state.clone()),
            Json(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "wrong".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown.message, wrong_password.message);
    }
}
