//! Driving port for portfolio reads.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Owner, Tenant, Unit, UnitId};

/// A unit joined with its owner of record and tenants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDetail {
    /// The unit itself.
    pub unit: Unit,
    /// The owner of record, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,
    /// Every tenant leasing the unit.
    pub tenants: Vec<Tenant>,
}

/// Read operations over units, owners, and tenants.
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// All units.
    async fn list_units(&self) -> Result<Vec<Unit>, Error>;

    /// One unit with its owner and tenants. Unknown ids are `not_found`.
    async fn unit_detail(&self, id: UnitId) -> Result<UnitDetail, Error>;

    /// All owners.
    async fn list_owners(&self) -> Result<Vec<Owner>, Error>;

    /// All tenants.
    async fn list_tenants(&self) -> Result<Vec<Tenant>, Error>;
}
