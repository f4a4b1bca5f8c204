//! Portfolio directory service: CRUD over units, owners, and tenants.
//!
//! This service owns the one piece of cross-collection behaviour in the
//! portfolio: deleting a unit cascades to its owner and tenants so no
//! orphaned record can survive the removal.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{
    DirectoryCommand, DirectoryQuery, OwnerDraft, OwnerRepository, OwnerStoreError, TenantDraft,
    TenantRepository, TenantStoreError, UnitDetail, UnitDraft, UnitRepository, UnitStoreError,
};
use crate::domain::{Error, Owner, OwnerId, Tenant, TenantId, Unit, UnitId};

/// Domain service implementing the directory command and query ports.
#[derive(Clone)]
pub struct DirectoryService<U, O, T> {
    units: Arc<U>,
    owners: Arc<O>,
    tenants: Arc<T>,
}

impl<U, O, T> DirectoryService<U, O, T> {
    /// Create a new directory service over the given repositories.
    pub fn new(units: Arc<U>, owners: Arc<O>, tenants: Arc<T>) -> Self {
        Self {
            units,
            owners,
            tenants,
        }
    }
}

#[async_trait]
impl<U, O, T> DirectoryCommand for DirectoryService<U, O, T>
where
    U: UnitRepository,
    O: OwnerRepository,
    T: TenantRepository,
{
    async fn create_unit(&self, draft: UnitDraft) -> Result<Unit, Error> {
        let unit = draft.into_unit(UnitId::random());
        self.units
            .insert(unit.clone())
            .await
            .map_err(map_unit_error)?;
        Ok(unit)
    }

    async fn update_unit(&self, unit: Unit) -> Result<Unit, Error> {
        let replaced = self
            .units
            .update(unit.clone())
            .await
            .map_err(map_unit_error)?;
        if !replaced {
            return Err(Error::not_found("unit not found"));
        }
        Ok(unit)
    }

    async fn delete_unit(&self, id: UnitId) -> Result<(), Error> {
        let removed = self.units.delete(id).await.map_err(map_unit_error)?;
        if !removed {
            return Err(Error::not_found("unit not found"));
        }

        let owners = self
            .owners
            .delete_by_unit(id)
            .await
            .map_err(map_owner_error)?;
        let tenants = self
            .tenants
            .delete_by_unit(id)
            .await
            .map_err(map_tenant_error)?;
        debug!(unit_id = %id, owners, tenants, "cascaded unit delete");
        Ok(())
    }

    async fn create_owner(&self, draft: OwnerDraft) -> Result<Owner, Error> {
        let owner = draft.into_owner(OwnerId::random());
        self.owners
            .insert(owner.clone())
            .await
            .map_err(map_owner_error)?;
        Ok(owner)
    }

    async fn update_owner(&self, owner: Owner) -> Result<Owner, Error> {
        let replaced = self
            .owners
            .update(owner.clone())
            .await
            .map_err(map_owner_error)?;
        if !replaced {
            return Err(Error::not_found("owner not found"));
        }
        Ok(owner)
    }

    async fn delete_owner(&self, id: OwnerId) -> Result<(), Error> {
        let removed = self.owners.delete(id).await.map_err(map_owner_error)?;
        if !removed {
            return Err(Error::not_found("owner not found"));
        }
        Ok(())
    }

    async fn create_tenant(&self, draft: TenantDraft) -> Result<Tenant, Error> {
        let tenant = draft.into_tenant(TenantId::random());
        self.tenants
            .insert(tenant.clone())
            .await
            .map_err(map_tenant_error)?;
        Ok(tenant)
    }

    async fn update_tenant(&self, tenant: Tenant) -> Result<Tenant, Error> {
        let replaced = self
            .tenants
            .update(tenant.clone())
            .await
            .map_err(map_tenant_error)?;
        if !replaced {
            return Err(Error::not_found("tenant not found"));
        }
        Ok(tenant)
    }

    async fn delete_tenant(&self, id: TenantId) -> Result<(), Error> {
        let removed = self.tenants.delete(id).await.map_err(map_tenant_error)?;
        if !removed {
            return Err(Error::not_found("tenant not found"));
        }
        Ok(())
    }
}

#[async_trait]
impl<U, O, T> DirectoryQuery for DirectoryService<U, O, T>
where
    U: UnitRepository,
    O: OwnerRepository,
    T: TenantRepository,
{
    async fn list_units(&self) -> Result<Vec<Unit>, Error> {
        self.units.list().await.map_err(map_unit_error)
    }

    async fn unit_detail(&self, id: UnitId) -> Result<UnitDetail, Error> {
        let unit = self
            .units
            .find_by_id(id)
            .await
            .map_err(map_unit_error)?
            .ok_or_else(|| Error::not_found("unit not found"))?;
        let owner = self
            .owners
            .find_by_unit(id)
            .await
            .map_err(map_owner_error)?;
        let tenants = self
            .tenants
            .list_by_unit(id)
            .await
            .map_err(map_tenant_error)?;
        Ok(UnitDetail {
            unit,
            owner,
            tenants,
        })
    }

    async fn list_owners(&self) -> Result<Vec<Owner>, Error> {
        self.owners.list().await.map_err(map_owner_error)
    }

    async fn list_tenants(&self) -> Result<Vec<Tenant>, Error> {
        self.tenants.list().await.map_err(map_tenant_error)
    }
}

fn map_unit_error(error: UnitStoreError) -> Error {
    Error::internal(format!("unit store failed: {error}"))
}

fn map_owner_error(error: OwnerStoreError) -> Error {
    Error::internal(format!("owner store failed: {error}"))
}

fn map_tenant_error(error: TenantStoreError) -> Error {
    Error::internal(format!("tenant store failed: {error}"))
}
