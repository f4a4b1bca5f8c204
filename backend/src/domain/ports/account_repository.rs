//! Port abstraction for user account persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{AccountId, UserAccount};

/// Persistence errors raised by account repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountStoreError {
    /// Query or mutation failed during execution.
    #[error("account store query failed: {message}")]
    Query { message: String },
}

impl AccountStoreError {
    /// Build an [`AccountStoreError::Query`] from any message type.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for user account storage and retrieval.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, in insertion order.
    async fn list(&self) -> Result<Vec<UserAccount>, AccountStoreError>;

    /// Fetch an account by identifier.
    async fn find_by_id(&self, id: AccountId) -> Result<Option<UserAccount>, AccountStoreError>;

    /// Fetch an account by login email (exact match).
    async fn find_by_email(&self, email: &str)
    -> Result<Option<UserAccount>, AccountStoreError>;

    /// Append a new account record.
    async fn insert(&self, account: UserAccount) -> Result<(), AccountStoreError>;

    /// Replace the account with the same id. Returns `false` when absent.
    async fn update(&self, account: UserAccount) -> Result<bool, AccountStoreError>;

    /// Remove an account by id. Returns `false` when absent.
    async fn delete(&self, id: AccountId) -> Result<bool, AccountStoreError>;
}
