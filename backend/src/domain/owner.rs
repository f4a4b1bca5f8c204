//! Property owner record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{OwnerId, UnitId};

/// The owner of record for a unit.
///
/// At most one owner per unit is enforced by the import pipeline only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Stable identifier assigned at creation.
    pub id: OwnerId,
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
    pub has_dog: bool,
    /// Whether a cat is registered for the unit.
    pub has_cat: bool,
}
