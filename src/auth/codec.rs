// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token codec: issuing and verifying signed access tokens.
//!
//! Tokens are HS256 JWTs carrying `{user_id, iat, exp}`. The codec is a pure
//! function of its inputs and the symmetric signing key: issuing performs no
//! I/O, and verification is a stateless check of signature and expiry.
//! Expiry is compared against the wall clock with zero leeway.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use uuid::Uuid;

use super::claims::AccessClaims;
use super::error::AuthError;

/// Issues and verifies access tokens with a fixed key and lifetime.
///
/// Immutable after construction, so it is freely shared across request tasks.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from the configured signing key and token lifetime.
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry only; there is no aud/iss/nbf in this token format, and no
        // clock-skew grace period.
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_aud = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// The configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a signed token for the given user identifier.
    ///
    /// The embedded expiry is `now + ttl`. Holding the signing key is both
    /// necessary and sufficient to mint a token that verifies.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = AccessClaims {
            user_id: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            // Encoding HS256 with an in-memory key cannot fail in practice;
            // surface it as a malformed-token condition rather than panic.
            .map_err(|_| AuthError::Malformed)
    }

    /// Verify a token string and return its embedded claims.
    ///
    /// Fails with [`AuthError::InvalidSignature`] if tampered or signed with
    /// a different key, [`AuthError::Expired`] past the expiry instant, and
    /// [`AuthError::Malformed`] if the encoding cannot be parsed. The check
    /// is terminal; retry means re-authentication by the user.
    pub fn verify(&self, token: &str) -> Result<AccessClaims, AuthError> {
        let data = decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(
            |error| match error.kind() {
                ErrorKind::ExpiredSignature => AuthError::Expired,
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                _ => AuthError::Malformed,
            },
        )?;
        Ok(data.claims)
    }
}
