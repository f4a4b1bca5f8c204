//! User account data model.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use crate::domain::{AccountId, Role};

/// Validation errors returned by [`UserAccount::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyEmail,
    EmptyPassword,
    EmptyName,
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
        }
    }
}

impl std::error::Error for AccountValidationError {}

/// Application user account.
///
/// ## Invariants
/// - `email`, `password`, and `name` are non-empty once trimmed.
/// - `role` is one of the closed [`Role`] set.
/// - `approved` gates every protected operation; newly registered accounts
///   start unapproved.
///
/// The password is stored in plaintext by explicit non-goal of this system
/// and compared with simple equality; it is wrapped in [`Zeroizing`] so the
/// secret at least leaves memory when the account value is dropped. It is
/// never serialised: outbound representations are built from the accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    id: AccountId,
    email: String,
    password: Zeroizing<String>,
    name: String,
    role: Role,
    approved: bool,
    created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Fallible constructor enforcing the field invariants.
    ///
    /// A fresh [`AccountId`] is generated; `created_at` comes from the
    /// caller so services can stamp it from an injected clock.
    pub fn try_new(
        email: impl Into<String>,
        password: impl Into<String>,
        name: impl Into<String>,
        role: Role,
        approved: bool,
        created_at: DateTime<Utc>,
    ) -> Result<Self, AccountValidationError> {
        let email = email.into();
        let password = password.into();
        let name = name.into();

        if email.trim().is_empty() {
            return Err(AccountValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        if name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        Ok(Self {
            id: AccountId::random(),
            email,
            password: Zeroizing::new(password),
            name,
            role,
            approved,
            created_at,
        })
    }

    /// Stable account identifier.
    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Login email, intended unique across accounts.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Plaintext password used for login comparison.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Display name shown in navigation and user administration.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Access tier.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether an admin has approved this account.
    pub fn approved(&self) -> bool {
        self.approved
    }

    /// Account creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Mark the account as approved.
    pub fn approve(&mut self) {
        self.approved = true;
    }

    /// Replace the access tier.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    /// Replace the approval flag.
    pub fn set_approved(&mut self, approved: bool) {
        self.approved = approved;
    }

    /// Replace the display name, enforcing the non-empty invariant.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), AccountValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }
        self.name = name;
        Ok(())
    }

    /// Replace the password, enforcing the non-empty invariant.
    pub fn set_password(
        &mut self,
        password: impl Into<String>,
    ) -> Result<(), AccountValidationError> {
        let password = password.into();
        if password.is_empty() {
            return Err(AccountValidationError::EmptyPassword);
        }
        self.password = Zeroizing::new(password);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn account() -> UserAccount {
        UserAccount::try_new(
            "admin@strata.com",
            "admin123",
            "Admin User",
            Role::Admin,
            true,
            Utc::now(),
        )
        .expect("fixture account is valid")
    }

    #[rstest]
    #[case("", "pw", "Name", AccountValidationError::EmptyEmail)]
    #[case("  ", "pw", "Name", AccountValidationError::EmptyEmail)]
    #[case("a@b.c", "", "Name", AccountValidationError::EmptyPassword)]
    #[case("a@b.c", "pw", "   ", AccountValidationError::EmptyName)]
    fn rejects_blank_fields(
        #[case] email: &str,
        #[case] password: &str,
        #[case] name: &str,
        #[case] expected: AccountValidationError,
    ) {
        let err = UserAccount::try_new(email, password, name, Role::Viewer, false, Utc::now())
            .expect_err("blank fields must fail");
        assert_eq!(err, expected);
    }

    #[test]
    fn approve_flips_the_flag() {
        let mut account = UserAccount::try_new(
            "new@strata.com",
            "pw",
            "New User",
            Role::Viewer,
            false,
            Utc::now(),
        )
        .expect("valid account");
        assert!(!account.approved());
        account.approve();
        assert!(account.approved());
    }

    #[test]
    fn setters_enforce_invariants() {
        let mut account = account();
        assert!(account.set_name("  ").is_err());
        assert!(account.set_password("").is_err());
        account.set_name("Renamed").expect("non-empty name");
        account.set_role(Role::Manager);
        assert_eq!(account.name(), "Renamed");
        assert_eq!(account.role(), Role::Manager);
    }
}
