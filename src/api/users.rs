// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! User endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::UserDetailResponse;
use crate::state::AppState;

/// Fetch a user record by ID.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "User ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User data retrieved", body = UserDetailResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user(
    Auth(_caller): Auth,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserDetailResponse>, ApiError> {
    let store = state.store.read().await;
    let user = store
        .user_by_id(user_id)
        .ok_or_else(|| ApiError::not_found(format!("User with id {user_id} does not exist")))?;

    Ok(Json(UserDetailResponse {
        status: "success".to_string(),
        message: "User data retrieved successfully".to_string(),
        data: user.to_response(),
    }))
}
