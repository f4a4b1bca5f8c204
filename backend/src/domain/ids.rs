//! Identifier newtypes for the domain aggregates.
//!
//! Every collection hands out freshly generated UUID identifiers; the
//! newtypes keep a unit id from being handed to an owner lookup by accident.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id! {
    /// Stable identifier for a [`crate::domain::Unit`].
    UnitId
}

define_id! {
    /// Stable identifier for an [`crate::domain::Owner`].
    OwnerId
}

define_id! {
    /// Stable identifier for a [`crate::domain::Tenant`].
    TenantId
}

define_id! {
    /// Stable identifier for a [`crate::domain::UserAccount`].
    AccountId
}
