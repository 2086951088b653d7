// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Organisation endpoints.
//!
//! Organisation detail is member-only; the membership check happens here, on
//! top of the authentication the middleware already performed.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::auth::Auth;
use crate::error::ApiError;
use crate::models::{
    AddMemberRequest, CreateOrganisationRequest, MessageResponse, OrganisationDetailResponse,
    OrganisationListResponse, OrganisationsData,
};
use crate::state::AppState;

/// List the organisations the caller belongs to.
#[utoipa::path(
    get,
    path = "/api/organisations",
    tag = "Organisations",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Caller's organisations", body = OrganisationListResponse),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn list_organisations(
    Auth(caller): Auth,
    State(state): State<AppState>,
) -> Json<OrganisationListResponse> {
    let store = state.store.read().await;
    let organisations = store
        .organisations_for_user(caller.user_id)
        .iter()
        .map(|org| org.to_response())
        .collect();

    Json(OrganisationListResponse {
        status: "success".to_string(),
        message: "Organisations Retrieved Successfully".to_string(),
        data: OrganisationsData { organisations },
    })
}

/// Create a new organisation; the caller becomes its first member.
#[utoipa::path(
    post,
    path = "/api/organisations",
    tag = "Organisations",
    request_body = CreateOrganisationRequest,
    security(("bearer" = [])),
    responses(
        (status = 201, description = "Organisation created", body = OrganisationDetailResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not authenticated"),
    )
)]
pub async fn create_organisation(
    Auth(caller): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateOrganisationRequest>,
) -> Result<(StatusCode, Json<OrganisationDetailResponse>), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::bad_request("Client error"));
    }

    let mut store = state.store.write().await;
    let organisation = store.create_organisation(
        request.name.trim(),
        request.description,
        vec![caller.user_id],
    );

    tracing::info!(org_id = %organisation.org_id, user_id = %caller.user_id, "organisation created");

    Ok((
        StatusCode::CREATED,
        Json(OrganisationDetailResponse {
            status: "success".to_string(),
            message: "Organisation created successfully".to_string(),
            data: organisation.to_response(),
        }),
    ))
}

/// Fetch an organisation the caller is a member of.
#[utoipa::path(
    get,
    path = "/api/organisations/{org_id}",
    tag = "Organisations",
    params(("org_id" = Uuid, Path, description = "Organisation ID")),
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Organisation retrieved", body = OrganisationDetailResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Caller is not a member"),
        (status = 404, description = "No such organisation"),
    )
)]
pub async fn get_organisation(
    Auth(caller): Auth,
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
) -> Result<Json<OrganisationDetailResponse>, ApiError> {
    let store = state.store.read().await;
    let organisation = store.organisation_by_id(org_id).ok_or_else(|| {
        ApiError::not_found(format!("Organisation with id {org_id} does not exist"))
    })?;

    if !organisation.is_member(caller.user_id) {
        return Err(ApiError::forbidden("Access denied"));
    }

    Ok(Json(OrganisationDetailResponse {
        status: "success".to_string(),
        message: "Organisation retrieved successfully".to_string(),
        data: organisation.to_response(),
    }))
}

/// Add a user to an organisation.
#[utoipa::path(
    post,
    path = "/api/organisations/{org_id}/users",
    tag = "Organisations",
    params(("org_id" = Uuid, Path, description = "Organisation ID")),
    request_body = AddMemberRequest,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "User added", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Organisation or user missing"),
    )
)]
pub async fn add_member(
    Auth(_caller): Auth,
    State(state): State<AppState>,
    Path(org_id): Path<Uuid>,
    Json(request): Json<AddMemberRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut store = state.store.write().await;
    store.add_member(org_id, request.user_id)?;

    Ok(Json(MessageResponse {
        status: "success".to_string(),
        message: "User added to organisation successfully".to_string(),
    }))
}
