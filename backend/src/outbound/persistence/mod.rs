//! In-memory persistence adapters.
//!
//! The product holds all state in process-local memory: repositories are
//! `RwLock`-guarded vectors behind the domain's repository ports. The port
//! traits keep the storage pluggable — a durable adapter would slot in
//! without touching the domain — but in-memory is the real store here, not a
//! test double.

mod memory;

pub use memory::{
    InMemoryAccountRepository, InMemoryOwnerRepository, InMemoryTenantRepository,
    InMemoryUnitRepository,
};
