//! Port abstraction for tenant persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Tenant, TenantId, UnitId};

/// Persistence errors raised by tenant repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TenantStoreError {
    /// Query or mutation failed during execution.
    #[error("tenant store query failed: {message}")]
    Query { message: String },
}

impl TenantStoreError {
    /// Build a [`TenantStoreError::Query`] from any message type.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for tenant storage and retrieval.
#[async_trait]
pub trait TenantRepository: Send + Sync {
    /// All tenants, in insertion order.
    async fn list(&self) -> Result<Vec<Tenant>, TenantStoreError>;

    /// Fetch a tenant by identifier.
    async fn find_by_id(&self, id: TenantId) -> Result<Option<Tenant>, TenantStoreError>;

    /// Every tenant leasing the given unit.
    async fn list_by_unit(&self, unit_id: UnitId) -> Result<Vec<Tenant>, TenantStoreError>;

    /// Append a new tenant record.
    async fn insert(&self, tenant: Tenant) -> Result<(), TenantStoreError>;

    /// Replace the tenant with the same id. Returns `false` when absent.
    async fn update(&self, tenant: Tenant) -> Result<bool, TenantStoreError>;

    /// Remove a tenant by id. Returns `false` when absent.
    async fn delete(&self, id: TenantId) -> Result<bool, TenantStoreError>;

    /// Remove every tenant referencing a unit. Returns the removed count.
    async fn delete_by_unit(&self, unit_id: UnitId) -> Result<usize, TenantStoreError>;
}
