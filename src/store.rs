// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-memory store for user and organisation records.
//!
//! This is the persistence collaborator behind the API: a concurrent-safe
//! read/write map guarded by the `RwLock` in [`crate::state::AppState`].
//! Records are keyed by their stable UUID identifiers; users additionally
//! support lookup by email for the login flow.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::ApiError;
use crate::models::{OrganisationResponse, UserResponse};

/// A stored user record. Owns the password digest for its entire lifetime;
/// the plaintext password never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// PHC-formatted Argon2id digest.
    pub password_hash: String,
    pub phone: Option<String>,
}

impl User {
    /// Public view of this record, without the password digest.
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            user_id: self.user_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// A stored organisation record with its member set.
#[derive(Debug, Clone)]
pub struct Organisation {
    pub org_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// User IDs of members. Insertion order is preserved for stable listings.
    pub members: Vec<Uuid>,
}

impl Organisation {
    pub fn is_member(&self, user_id: Uuid) -> bool {
        self.members.contains(&user_id)
    }

    pub fn to_response(&self) -> OrganisationResponse {
        OrganisationResponse {
            org_id: self.org_id,
            name: self.name.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    users: HashMap<Uuid, User>,
    organisations: HashMap<Uuid, Organisation>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new user. Fails if the email is already registered.
    pub fn insert_user(&mut self, user: User) -> Result<(), ApiError> {
        if self
            .users
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(ApiError::unprocessable(
                "A user with this email already exists",
            ));
        }
        self.users.insert(user.user_id, user);
        Ok(())
    }

    pub fn user_by_id(&self, user_id: Uuid) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Create an organisation with an initial member set.
    pub fn create_organisation(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        members: Vec<Uuid>,
    ) -> Organisation {
        let organisation = Organisation {
            org_id: Uuid::new_v4(),
            name: name.into(),
            description,
            members,
        };
        self.organisations
            .insert(organisation.org_id, organisation.clone());
        organisation
    }

    pub fn organisation_by_id(&self, org_id: Uuid) -> Option<&Organisation> {
        self.organisations.get(&org_id)
    }

    /// Organisations the given user belongs to.
    pub fn organisations_for_user(&self, user_id: Uuid) -> Vec<Organisation> {
        self.organisations
            .values()
            .filter(|org| org.is_member(user_id))
            .cloned()
            .collect()
    }

    /// Add a user to an organisation. Adding an existing member is a no-op.
    pub fn add_member(&mut self, org_id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        if !self.users.contains_key(&user_id) {
            return Err(ApiError::not_found(format!(
                "User with id {user_id} does not exist"
            )));
        }

        let Some(organisation) = self.organisations.get_mut(&org_id) else {
            return Err(ApiError::not_found(format!(
                "Organisation with id {org_id} does not exist"
            )));
        };

        if !organisation.members.contains(&user_id) {
            organisation.members.push(user_id);
        }
        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}
