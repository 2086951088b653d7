// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation.
//!
//! The wire format uses camelCase field names (`userId`, `firstName`,
//! `accessToken`, `orgId`) and wraps every successful response in a
//! `{status, message, data}` envelope.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// =============================================================================
// User Models
// =============================================================================

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    /// Must be unique across all users.
    pub email: String,
    /// Never stored; only a salted digest is persisted.
    pub password: String,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request to log in with an email/password credential.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public representation of a user record. The password digest is never
/// serialized.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

// =============================================================================
// Organisation Models
// =============================================================================

/// Request to create a new organisation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrganisationRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request to add a user to an organisation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

/// Public representation of an organisation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationResponse {
    pub org_id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// =============================================================================
// Response Envelopes
// =============================================================================

/// Token plus user payload returned by register and login.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// The issued access token (JWT).
    pub access_token: String,
    pub user: UserResponse,
}

/// Envelope for register/login responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub status: String,
    pub message: String,
    pub data: AuthData,
}

/// Envelope for a single user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDetailResponse {
    pub status: String,
    pub message: String,
    pub data: UserResponse,
}

/// Organisations belonging to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganisationsData {
    pub organisations: Vec<OrganisationResponse>,
}

/// Envelope for the organisation list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganisationListResponse {
    pub status: String,
    pub message: String,
    pub data: OrganisationsData,
}

/// Envelope for a single organisation record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganisationDetailResponse {
    pub status: String,
    pub message: String,
    pub data: OrganisationResponse,
}

/// Envelope for responses that carry no data payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_response_serializes_camel_case() {
        let user = UserResponse {
            user_id: Uuid::nil(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userId"], Uuid::nil().to_string());
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["lastName"], "Lovelace");
        // Absent phone is omitted entirely, not null.
        assert!(json.get("phone").is_none());
    }

    #[test]
    fn auth_data_serializes_access_token_camel_case() {
        let data = AuthData {
            access_token: "token".to_string(),
            user: UserResponse {
                user_id: Uuid::nil(),
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                phone: None,
            },
        };

        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["accessToken"], "token");
    }

    #[test]
    fn register_request_accepts_missing_phone() {
        let request: RegisterRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"a@b.c","password":"pw"}"#,
        )
        .unwrap();
        assert_eq!(request.phone, None);
    }
}
