//! Domain primitives, aggregates, and services.
//!
//! Purpose: define strongly typed domain entities used by the HTTP and
//! persistence layers, the services that implement the driving ports, and the
//! port traits adapters plug into. Keep types transport-agnostic and document
//! invariants and serialisation contracts (serde) in each type's Rustdoc.

pub mod account;
pub mod auth;
pub mod directory;
pub mod error;
pub mod ids;
pub mod import;
pub mod owner;
pub mod ports;
pub mod role;
pub mod tenant;
pub mod unit;
pub mod user;

pub use self::account::AccountService;
pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::directory::DirectoryService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{AccountId, OwnerId, TenantId, UnitId};
pub use self::import::{ImportKind, ImportReport, ImportService};
pub use self::owner::Owner;
pub use self::role::{Role, can_access};
pub use self::tenant::Tenant;
pub use self::unit::Unit;
pub use self::user::{AccountValidationError, UserAccount};
