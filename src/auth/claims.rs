// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token claims and the authenticated request context.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::store::User;

/// Claims embedded in an access token.
///
/// The wire names match the original token format: the subject is carried in
/// a `user_id` claim rather than `sub`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessClaims {
    /// Stable unique user identifier, as a UUID string.
    pub user_id: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Absolute expiry instant (Unix timestamp).
    pub exp: i64,
}

/// The per-request binding from a validated token to a user record.
///
/// Produced by the authentication middleware, attached to the request for the
/// duration of its processing, and never persisted.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// Canonical user ID from the token's `user_id` claim.
    pub user_id: Uuid,
    /// Email of the resolved user record.
    pub email: String,
    /// Token expiry (Unix timestamp); kept for logging, not serialized.
    #[serde(skip)]
    pub expires_at: i64,
}

impl AuthenticatedUser {
    /// Bind verified claims to the resolved user record.
    pub fn new(user: &User, expires_at: i64) -> Self {
        Self {
            user_id: user.user_id,
            email: user.email.clone(),
            expires_at,
        }
    }
}
