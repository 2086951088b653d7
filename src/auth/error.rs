// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authentication errors.
//!
//! Every variant collapses to the same unauthenticated HTTP outcome. Which
//! check failed is logged server-side but never surfaced to the caller, so a
//! probing client cannot distinguish a forged token from an expired one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Reasons an authentication attempt is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Neither the Authorization header nor the cookie carried a token.
    #[error("no token presented")]
    MissingToken,
    /// The token string could not be parsed.
    #[error("token is malformed")]
    Malformed,
    /// The signature check failed (tampered or foreign key).
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The token is past its expiry instant.
    #[error("token has expired")]
    Expired,
    /// The embedded identifier no longer resolves to a user record.
    #[error("token subject does not resolve to a user")]
    UserNotFound,
}

#[derive(Serialize)]
struct RejectionBody {
    status: String,
    message: String,
    #[serde(rename = "statusCode")]
    status_code: u16,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        // Deliberately uniform: one body for every rejection reason.
        tracing::debug!(reason = %self, "request rejected as unauthenticated");
        let body = Json(RejectionBody {
            status: "Bad request".to_string(),
            message: "Authentication failed".to_string(),
            status_code: StatusCode::UNAUTHORIZED.as_u16(),
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
