//! Strata property-management backend library.
//!
//! A session-authenticated HTTP API over in-memory stores: units, owners,
//! tenants, user accounts with role-gated access, and a CSV bulk-import
//! pipeline. Layout follows hexagonal lines: `domain` holds entities,
//! services, and ports; `inbound` adapts HTTP; `outbound` adapts storage.

pub mod doc;
pub mod domain;
#[cfg(feature = "example-data")]
pub mod example_data;
pub mod inbound;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
