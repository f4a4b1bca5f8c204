//! Port abstraction for unit persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Unit, UnitId};

/// Persistence errors raised by unit repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnitStoreError {
    /// Query or mutation failed during execution.
    #[error("unit store query failed: {message}")]
    Query { message: String },
}

impl UnitStoreError {
    /// Build a [`UnitStoreError::Query`] from any message type.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for unit storage and retrieval.
#[async_trait]
pub trait UnitRepository: Send + Sync {
    /// All units, in insertion order.
    async fn list(&self) -> Result<Vec<Unit>, UnitStoreError>;

    /// Fetch a unit by identifier.
    async fn find_by_id(&self, id: UnitId) -> Result<Option<Unit>, UnitStoreError>;

    /// Fetch a unit by its human-facing number.
    async fn find_by_number(&self, number: &str) -> Result<Option<Unit>, UnitStoreError>;

    /// Append a new unit record.
    async fn insert(&self, unit: Unit) -> Result<(), UnitStoreError>;

    /// Replace the unit with the same id. Returns `false` when absent.
    async fn update(&self, unit: Unit) -> Result<bool, UnitStoreError>;

    /// Remove a unit by id. Returns `false` when absent.
    async fn delete(&self, id: UnitId) -> Result<bool, UnitStoreError>;
}
