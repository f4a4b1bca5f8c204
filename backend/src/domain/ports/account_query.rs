//! Driving port for account reads and authentication.

use async_trait::async_trait;

use crate::domain::{AccountId, Error, LoginCredentials, UserAccount};

/// Read operations over user accounts.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    /// Resolve credentials to an account.
    ///
    /// The failure message is uniform for unknown emails and wrong
    /// passwords so callers cannot probe which emails exist.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<UserAccount, Error>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<UserAccount>, Error>;

    /// All accounts.
    async fn list_users(&self) -> Result<Vec<UserAccount>, Error>;

    /// Accounts awaiting approval.
    async fn pending_users(&self) -> Result<Vec<UserAccount>, Error>;
}
