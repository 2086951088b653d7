// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authentication Module
//!
//! Session-token authentication for the userorg API.
//!
//! ## Auth Flow
//!
//! 1. Client registers or logs in with email/password
//! 2. Server issues an HS256 JWT carrying `{user_id, iat, exp}` with a
//!    2-hour lifetime, returned in the body and set as the `access-token`
//!    HttpOnly cookie
//! 3. Client replays the token via `Authorization: Bearer <token>` (preferred)
//!    or the cookie
//! 4. The middleware verifies signature and expiry, resolves the user record,
//!    and attaches the authenticated context to the request
//!
//! ## Security
//!
//! - Every failure kind (malformed, bad signature, expired, unknown user)
//!   collapses to the same 401 response; the caller learns nothing about
//!   which check failed
//! - Expiry is checked with zero clock-skew leeway
//! - Passwords are stored only as Argon2id digests

pub mod claims;
pub mod codec;
pub mod error;
pub mod extractor;
pub mod middleware;
pub mod password;

pub use claims::AuthenticatedUser;
pub use codec::TokenCodec;
pub use error::AuthError;
pub use extractor::{Auth, Authenticator, SessionAuthenticator, ACCESS_TOKEN_COOKIE};
pub use middleware::auth_middleware;
