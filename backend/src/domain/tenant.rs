//! Leaseholder record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{TenantId, UnitId};

/// A leaseholder of a unit. A unit may have any number of tenants.
///
/// Lease dates are kept as the raw strings supplied at entry or import; the
/// upload contract treats malformed values leniently rather than rejecting
/// the row, so no date parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    /// Stable identifier assigned at creation.
    pub id: TenantId,
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
    /// Lease start date as supplied, e.g. `"2023-01-01"`.
    pub lease_start: String,
    /// Lease end date as supplied.
    pub lease_end: String,
    /// Whether a dog is registered for the unit.
    pub has_dog: bool,
    /// Whether a cat is registered for the unit.
    pub has_cat: bool,
}
