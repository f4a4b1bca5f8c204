//! Driving port for portfolio mutations.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Owner, OwnerId, Tenant, TenantId, Unit, UnitId};

/// Payload for creating or replacing a unit; the id comes from the caller's
/// context (fresh for creation, the path id for updates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitDraft {
    /// Human-facing unit number.
    pub number: String,
    /// Floor label.
    pub floor: String,
    /// Interior size in square feet.
    #[serde(default)]
    pub size: u32,
    /// Bedroom count.
    #[serde(default)]
    pub bedrooms: u32,
    /// Bathroom count.
    #[serde(default)]
    pub bathrooms: u32,
    /// Assigned storage lockers.
    #[serde(default)]
    pub lockers: u32,
    /// Assigned parking spots.
    #[serde(default)]
    pub parking_spots: u32,
    /// Assigned bike storage slots.
    #[serde(default)]
    pub bike_storage: u32,
}

impl UnitDraft {
    /// Materialise the draft into a [`Unit`] with the given id.
    pub fn into_unit(self, id: UnitId) -> Unit {
        Unit {
            id,
            number: self.number,
            floor: self.floor,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            lockers: self.lockers,
            parking_spots: self.parking_spots,
            bike_storage: self.bike_storage,
        }
    }
}

/// Payload for creating or replacing an owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDraft {
    /// The unit this owner holds title to.
    pub unit_id: UnitId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Postal address for correspondence.
    pub mailing_address: String,
    /// Whether a dog is registered for the unit.
    #[serde(default)]
    pub has_dog: bool,
    /// Whether a cat is registered for the unit.
    #[serde(default)]
    pub has_cat: bool,
}

impl OwnerDraft {
    /// Materialise the draft into an [`Owner`] with the given id.
    pub fn into_owner(self, id: OwnerId) -> Owner {
        Owner {
            id,
            unit_id: self.unit_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            mailing_address: self.mailing_address,
            has_dog: self.has_dog,
            has_cat: self.has_cat,
        }
    }
}

/// Payload for creating or replacing a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TenantDraft {
    /// The unit this tenant leases.
    pub unit_id: UnitId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Lease start date as supplied.
    #[serde(default)]
    pub lease_start: String,
    /// Lease end date as supplied.
    #[serde(default)]
    pub lease_end: String,
    /// Whether a dog is registered for the unit.
    #[serde(default)]
    pub has_dog: bool,
    /// Whether a cat is registered for the unit.
    #[serde(default)]
    pub has_cat: bool,
}

impl TenantDraft {
    /// Materialise the draft into a [`Tenant`] with the given id.
    pub fn into_tenant(self, id: TenantId) -> Tenant {
        Tenant {
            id,
            unit_id: self.unit_id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            lease_start: self.lease_start,
            lease_end: self.lease_end,
            has_dog: self.has_dog,
            has_cat: self.has_cat,
        }
    }
}

/// Mutating operations over units, owners, and tenants.
///
/// Deleting a unit cascades: the unit's owner and every tenant referencing
/// it are removed in the same call, so no orphaned record can survive.
#[async_trait]
pub trait DirectoryCommand: Send + Sync {
    /// Create a unit from a draft, assigning a fresh id.
    async fn create_unit(&self, draft: UnitDraft) -> Result<Unit, Error>;

    /// Replace an existing unit. Unknown ids are `not_found`.
    async fn update_unit(&self, unit: Unit) -> Result<Unit, Error>;

    /// Delete a unit and cascade to its owner and tenants.
    async fn delete_unit(&self, id: UnitId) -> Result<(), Error>;

    /// Create an owner from a draft, assigning a fresh id.
    async fn create_owner(&self, draft: OwnerDraft) -> Result<Owner, Error>;

    /// Replace an existing owner. Unknown ids are `not_found`.
    async fn update_owner(&self, owner: Owner) -> Result<Owner, Error>;

    /// Delete an owner.
    async fn delete_owner(&self, id: OwnerId) -> Result<(), Error>;

    /// Create a tenant from a draft, assigning a fresh id.
    async fn create_tenant(&self, draft: TenantDraft) -> Result<Tenant, Error>;

    /// Replace an existing tenant. Unknown ids are `not_found`.
    async fn update_tenant(&self, tenant: Tenant) -> Result<Tenant, Error>;

    /// Delete a tenant.
    async fn delete_tenant(&self, id: TenantId) -> Result<(), Error>;
}
