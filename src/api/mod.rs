// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::auth_middleware,
    models::{
        AddMemberRequest, AuthData, AuthResponse, CreateOrganisationRequest, LoginRequest,
        MessageResponse, OrganisationDetailResponse, OrganisationListResponse, OrganisationsData,
        OrganisationResponse, RegisterRequest, UserDetailResponse, UserResponse,
    },
    state::AppState,
};

pub mod auth;
pub mod health;
pub mod organisations;
pub mod users;

pub fn router(state: AppState) -> Router {
    // Everything under /api requires an authenticated context; the two /auth
    // routes and the health probes stay open.
    let protected = Router::new()
        .route("/users/{user_id}", get(users::get_user))
        .route(
            "/organisations",
            get(organisations::list_organisations).post(organisations::create_organisation),
        )
        .route("/organisations/{org_id}", get(organisations::get_organisation))
        .route(
            "/organisations/{org_id}/users",
            post(organisations::add_member),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .nest("/api", protected)
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register,
        auth::login,
        users::get_user,
        organisations::list_organisations,
        organisations::create_organisation,
        organisations::get_organisation,
        organisations::add_member,
        health::health,
        health::liveness
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UserResponse,
            UserDetailResponse,
            AuthData,
            AuthResponse,
            CreateOrganisationRequest,
            AddMemberRequest,
            OrganisationResponse,
            OrganisationsData,
            OrganisationListResponse,
            OrganisationDetailResponse,
            MessageResponse
        )
    ),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Users", description = "User records"),
        (name = "Organisations", description = "Organisation membership"),
        (name = "Health", description = "Service health probes")
    )
)]
struct ApiDoc;
