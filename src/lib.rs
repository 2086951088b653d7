// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Userorg - User & Organisation Management Service
//!
//! REST backend for user registration, login, and organisation membership,
//! authenticated with signed session tokens.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Token issuance/verification and request authentication
//! - `store` - In-memory user/organisation record store
//! - `config` - Startup configuration loaded from the environment

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
