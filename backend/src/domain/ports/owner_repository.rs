//! Port abstraction for owner persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Owner, OwnerId, UnitId};

/// Persistence errors raised by owner repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OwnerStoreError {
    /// Query or mutation failed during execution.
    #[error("owner store query failed: {message}")]
    Query { message: String },
}

impl OwnerStoreError {
    /// Build an [`OwnerStoreError::Query`] from any message type.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for owner storage and retrieval.
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// All owners, in insertion order.
    async fn list(&self) -> Result<Vec<Owner>, OwnerStoreError>;

    /// Fetch an owner by identifier.
    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, OwnerStoreError>;

    /// Fetch the owner of record for a unit, if any.
    async fn find_by_unit(&self, unit_id: UnitId) -> Result<Option<Owner>, OwnerStoreError>;

    /// Append a new owner record.
    async fn insert(&self, owner: Owner) -> Result<(), OwnerStoreError>;

    /// Replace the owner with the same id. Returns `false` when absent.
    async fn update(&self, owner: Owner) -> Result<bool, OwnerStoreError>;

    /// Remove an owner by id. Returns `false` when absent.
    async fn delete(&self, id: OwnerId) -> Result<bool, OwnerStoreError>;

    /// Remove every owner referencing a unit. Returns the removed count.
    async fn delete_by_unit(&self, unit_id: UnitId) -> Result<usize, OwnerStoreError>;
}
