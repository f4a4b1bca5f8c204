//! Driving port for account mutations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{AccountId, Error, Role, UserAccount};

/// Self-service registration payload.
///
/// Registration always produces an unapproved viewer; an admin raises the
/// role or approves the account afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationDraft {
    /// Login email, intended unique.
    pub email: String,
    /// Plaintext password (hardening is an explicit non-goal).
    pub password: String,
    /// Display name.
    pub name: String,
}

/// Admin-created account payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUserDraft {
    /// Login email, intended unique.
    pub email: String,
    /// Plaintext password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Access tier.
    pub role: Role,
    /// Whether the account starts approved. Defaults to pending.
    #[serde(default)]
    pub approved: bool,
}

/// Partial account update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New access tier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// New approval flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved: Option<bool>,
}

/// Mutating operations over user accounts.
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Self-service registration. Duplicate emails are `conflict`.
    async fn register(&self, draft: RegistrationDraft) -> Result<UserAccount, Error>;

    /// Admin account creation. Duplicate emails are `conflict`.
    async fn create_user(&self, draft: NewUserDraft) -> Result<UserAccount, Error>;

    /// Apply a partial update. Unknown ids are `not_found`.
    async fn update_user(&self, id: AccountId, update: UserUpdate) -> Result<UserAccount, Error>;

    /// Mark an account approved. Unknown ids are `not_found`.
    async fn approve_user(&self, id: AccountId) -> Result<UserAccount, Error>;

    /// Delete an account. Unknown ids are `not_found`.
    async fn delete_user(&self, id: AccountId) -> Result<(), Error>;
}
