// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authenticator capability and the axum `Auth` extractor.
//!
//! [`Authenticator`] is the framework-independent seam: one operation turning
//! request headers into an [`AuthenticatedUser`] or a rejection. The axum
//! pieces (the route-level middleware and the [`Auth`] extractor) are thin
//! adapters over it.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is AuthenticatedUser
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
        HeaderMap,
    },
};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::claims::AuthenticatedUser;
use super::codec::TokenCodec;
use super::error::AuthError;
use crate::state::AppState;
use crate::store::InMemoryStore;

/// Cookie that carries the access token for browser clients.
pub const ACCESS_TOKEN_COOKIE: &str = "access-token";

/// Pull a candidate token out of the request headers.
///
/// The Authorization bearer header takes precedence; the `access-token`
/// cookie is the fallback channel. A header that is present but not in
/// bearer form is treated as absent.
fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok()) {
        if let Some(token) = value.strip_prefix("Bearer ") {
            return Some(token.trim().to_string());
        }
    }

    headers
        .get(COOKIE)
        .and_then(|h| h.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').map(str::trim).find_map(|cookie| {
                let (name, value) = cookie.split_once('=')?;
                (name == ACCESS_TOKEN_COOKIE).then(|| value.to_string())
            })
        })
}

/// Capability for authenticating a request from its headers.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Produce an authenticated context or a rejection reason.
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError>;
}

/// Token-based authenticator backed by the user store.
///
/// Per request: extract token, verify signature and expiry, resolve the user
/// record. Any failure short-circuits to a rejection; a missing token never
/// touches the store.
pub struct SessionAuthenticator {
    codec: TokenCodec,
    store: Arc<RwLock<InMemoryStore>>,
}

impl SessionAuthenticator {
    pub fn new(codec: TokenCodec, store: Arc<RwLock<InMemoryStore>>) -> Self {
        Self { codec, store }
    }

    /// The token codec, for issuance at login/registration.
    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }
}

#[async_trait]
impl Authenticator for SessionAuthenticator {
    async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthenticatedUser, AuthError> {
        let token = token_from_headers(headers).ok_or(AuthError::MissingToken)?;
        let claims = self.codec.verify(&token)?;

        let user_id = Uuid::parse_str(&claims.user_id).map_err(|_| AuthError::Malformed)?;

        // A token can outlive its account; treat that as unauthenticated.
        let store = self.store.read().await;
        let user = store.user_by_id(user_id).ok_or(AuthError::UserNotFound)?;

        Ok(AuthenticatedUser::new(user, claims.exp))
    }
}

/// Extractor for authenticated users.
///
/// Prefers the context already attached by the route-level middleware and
/// falls back to authenticating from the headers directly.
pub struct Auth(pub AuthenticatedUser);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthenticatedUser>().cloned() {
            return Ok(Auth(user));
        }

        let user = state.auth.authenticate(&parts.headers).await?;
        Ok(Auth(user))
    }
}
