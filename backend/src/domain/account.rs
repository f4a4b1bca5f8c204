//! User account service: registration, authentication, administration.
//!
//! Registration and admin creation both refuse duplicate emails; the login
//! failure message is uniform so callers cannot probe which emails exist.
//! Approval is a plain flag flip — the gate itself lives in the
//! authorization predicate, not here.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    AccountCommand, AccountQuery, AccountRepository, AccountStoreError, NewUserDraft,
    RegistrationDraft, UserUpdate,
};
use crate::domain::{AccountId, AccountValidationError, Error, LoginCredentials, Role, UserAccount};

/// Message returned for any failed login attempt.
const BAD_CREDENTIALS: &str = "Invalid email or password";

/// Message returned when a submitted email is already registered.
const DUPLICATE_EMAIL: &str = "Email already in use";

/// Domain service implementing the account command and query ports.
#[derive(Clone)]
pub struct AccountService<R> {
    accounts: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> AccountService<R> {
    /// Create a new account service over the given repository and clock.
    pub fn new(accounts: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { accounts, clock }
    }
}

impl<R> AccountService<R>
where
    R: AccountRepository,
{
    async fn refuse_duplicate_email(&self, email: &str) -> Result<(), Error> {
        let existing = self
            .accounts
            .find_by_email(email)
            .await
            .map_err(map_store_error)?;
        if existing.is_some() {
            return Err(Error::conflict(DUPLICATE_EMAIL));
        }
        Ok(())
    }

    async fn find_or_not_found(&self, id: AccountId) -> Result<UserAccount, Error> {
        self.accounts
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("user not found"))
    }

    async fn persist_update(&self, account: UserAccount) -> Result<UserAccount, Error> {
        let replaced = self
            .accounts
            .update(account.clone())
            .await
            .map_err(map_store_error)?;
        if !replaced {
            return Err(Error::not_found("user not found"));
        }
        Ok(account)
    }
}

#[async_trait]
impl<R> AccountCommand for AccountService<R>
where
    R: AccountRepository,
{
    async fn register(&self, draft: RegistrationDraft) -> Result<UserAccount, Error> {
        self.refuse_duplicate_email(&draft.email).await?;

        // Self-registered accounts start as unapproved viewers; an admin
        // raises the role or approves afterwards.
        let account = UserAccount::try_new(
            draft.email,
            draft.password,
            draft.name,
            Role::Viewer,
            false,
            self.clock.utc(),
        )
        .map_err(map_validation_error)?;

        self.accounts
            .insert(account.clone())
            .await
            .map_err(map_store_error)?;
        info!(account_id = %account.id(), "account registered, awaiting approval");
        Ok(account)
    }

    async fn create_user(&self, draft: NewUserDraft) -> Result<UserAccount, Error> {
        self.refuse_duplicate_email(&draft.email).await?;

        let account = UserAccount::try_new(
            draft.email,
            draft.password,
            draft.name,
            draft.role,
            draft.approved,
            self.clock.utc(),
        )
        .map_err(map_validation_error)?;

        self.accounts
            .insert(account.clone())
            .await
            .map_err(map_store_error)?;
        Ok(account)
    }

    async fn update_user(&self, id: AccountId, update: UserUpdate) -> Result<UserAccount, Error> {
        let mut account = self.find_or_not_found(id).await?;

        if let Some(name) = update.name {
            account.set_name(name).map_err(map_validation_error)?;
        }
        if let Some(password) = update.password {
            account.set_password(password).map_err(map_validation_error)?;
        }
        if let Some(role) = update.role {
            account.set_role(role);
        }
        if let Some(approved) = update.approved {
            account.set_approved(approved);
        }

        self.persist_update(account).await
    }

    async fn approve_user(&self, id: AccountId) -> Result<UserAccount, Error> {
        let mut account = self.find_or_not_found(id).await?;
        account.approve();
        let account = self.persist_update(account).await?;
        info!(account_id = %account.id(), "account approved");
        Ok(account)
    }

    async fn delete_user(&self, id: AccountId) -> Result<(), Error> {
        let removed = self.accounts.delete(id).await.map_err(map_store_error)?;
        if !removed {
            return Err(Error::not_found("user not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<R> AccountQuery for AccountService<R>
where
    R: AccountRepository,
{
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserAccount, Error> {
        let account = self
            .accounts
            .find_by_email(credentials.email())
            .await
            .map_err(map_store_error)?;

        match account {
            Some(account) if account.password() == credentials.password() => Ok(account),
            _ => Err(Error::unauthorized(BAD_CREDENTIALS)),
        }
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<UserAccount>, Error> {
        self.accounts.find_by_id(id).await.map_err(map_store_error)
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, Error> {
        self.accounts.list().await.map_err(map_store_error)
    }

    async fn pending_users(&self) -> Result<Vec<UserAccount>, Error> {
        let accounts = self.accounts.list().await.map_err(map_store_error)?;
        Ok(accounts
            .into_iter()
            .filter(|account| !account.approved())
            .collect())
    }
}

fn map_store_error(error: AccountStoreError) -> Error {
    Error::internal(format!("account store failed: {error}"))
}

fn map_validation_error(error: AccountValidationError) -> Error {
    Error::invalid_request(error.to_string())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::outbound::persistence::InMemoryAccountRepository;
    use mockable::DefaultClock;

    fn service() -> AccountService<InMemoryAccountRepository> {
        AccountService::new(
            Arc::new(InMemoryAccountRepository::default()),
            Arc::new(DefaultClock),
        )
    }

    fn registration(email: &str) -> RegistrationDraft {
        RegistrationDraft {
            email: email.to_owned(),
            password: "secret".to_owned(),
            name: "New User".to_owned(),
        }
    }

    #[tokio::test]
    async fn registration_creates_an_unapproved_viewer() {
        let service = service();
        let account = service
            .register(registration("new@strata.com"))
            .await
            .expect("registration succeeds");

        assert_eq!(account.role(), Role::Viewer);
        assert!(!account.approved());
        assert_eq!(
            service.pending_users().await.expect("pending list").len(),
            1
        );
    }

    #[tokio::test]
    async fn duplicate_email_is_a_conflict_and_leaves_the_store_unchanged() {
        let service = service();
        service
            .register(registration("new@strata.com"))
            .await
            .expect("first registration succeeds");

        let err = service
            .register(registration("new@strata.com"))
            .await
            .expect_err("duplicate must fail");
        assert_eq!(err.code(), ErrorCode::Conflict);
        assert_eq!(err.message(), "Email already in use");
        assert_eq!(service.list_users().await.expect("user list").len(), 1);
    }

    #[tokio::test]
    async fn authentication_failure_message_is_uniform() {
        let service = service();
        service
            .register(registration("new@strata.com"))
            .await
            .expect("registration succeeds");

        let unknown = LoginCredentials::try_from_parts("ghost@strata.com", "secret")
            .expect("valid credential shape");
        let wrong_password = LoginCredentials::try_from_parts("new@strata.com", "nope")
            .expect("valid credential shape");

        for credentials in [unknown, wrong_password] {
            let err = service
                .authenticate(&credentials)
                .await
                .expect_err("must fail");
            assert_eq!(err.code(), ErrorCode::Unauthorized);
            assert_eq!(err.message(), "Invalid email or password");
        }
    }

    #[tokio::test]
    async fn authentication_returns_the_matching_account() {
        let service = service();
        let created = service
            .register(registration("new@strata.com"))
            .await
            .expect("registration succeeds");

        let credentials = LoginCredentials::try_from_parts("new@strata.com", "secret")
            .expect("valid credential shape");
        let account = service
            .authenticate(&credentials)
            .await
            .expect("login succeeds");
        assert_eq!(account.id(), created.id());
    }

    #[tokio::test]
    async fn approve_then_update_role() {
        let service = service();
        let account = service
            .register(registration("new@strata.com"))
            .await
            .expect("registration succeeds");

        let approved = service
            .approve_user(account.id())
            .await
            .expect("approval succeeds");
        assert!(approved.approved());

        let updated = service
            .update_user(
                account.id(),
                UserUpdate {
                    role: Some(Role::Manager),
                    ..UserUpdate::default()
                },
            )
            .await
            .expect("update succeeds");
        assert_eq!(updated.role(), Role::Manager);
        assert!(service.pending_users().await.expect("pending list").is_empty());
    }

    #[tokio::test]
    async fn deleting_an_unknown_user_is_not_found() {
        let service = service();
        let err = service
            .delete_user(AccountId::random())
            .await
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn update_rejects_blank_name() {
        let service = service();
        let account = service
            .register(registration("new@strata.com"))
            .await
            .expect("registration succeeds");

        let err = service
            .update_user(
                account.id(),
                UserUpdate {
                    name: Some("   ".to_owned()),
                    ..UserUpdate::default()
                },
            )
            .await
            .expect_err("blank name must fail");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }
}
