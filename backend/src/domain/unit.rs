//! Residential unit record.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UnitId;

/// A physical residential space tracked by the system.
///
/// Unit numbers are expected to be unique across the portfolio, but the
/// import pipeline is the only place that enforces it; interactive creation
/// accepts whatever the caller supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    /// Stable identifier assigned at creation.
    pub id: UnitId,
    /// Human-facing unit number, e.g. `"101"`.
    pub number: String,
    /// Floor label as supplied, e.g. `"1"` or `"PH"`.
    pub floor: String,
    /// Interior size in square feet.
    pub size: u32,
    /// Bedroom count.
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Assigned storage lockers.
    pub lockers: u32,
    /// Assigned parking spots.
    pub parking_spots: u32,
    /// Assigned bike storage slots.
    pub bike_storage: u32,
}
