//! Access roles and the authorization predicate.
//!
//! Roles form a strict hierarchy: a manager can do everything a viewer can,
//! an admin can do everything a manager can. The predicate is a pure function
//! of the caller's role, their approval flag, and the required role; inbound
//! adapters decide how a refusal is surfaced.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Access tier of a user account.
///
/// Ordering follows privilege: `Viewer < Manager < Admin`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Read-only access to the portfolio screens.
    Viewer,
    /// Read-write access to units, owners, tenants, and imports.
    Manager,
    /// Full access, including user administration.
    Admin,
}

impl Role {
    /// Whether this role satisfies a requirement of `required`.
    pub fn grants(self, required: Self) -> bool {
        self >= required
    }

    /// Stable lowercase name used in serialised payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Viewer => "viewer",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown role name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "viewer" => Ok(Self::Viewer),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            other => Err(ParseRoleError(other.to_owned())),
        }
    }
}

/// Authorization predicate gating protected operations.
///
/// Unapproved accounts are refused regardless of role. When no role is
/// required, any approved account passes; otherwise the caller's role must
/// grant the requirement under the `Viewer < Manager < Admin` hierarchy.
pub fn can_access(role: Role, approved: bool, required: Option<Role>) -> bool {
    approved && required.is_none_or(|needed| role.grants(needed))
}
