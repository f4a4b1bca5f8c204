//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::{Clock, DefaultClock};

use crate::domain::ports::{
    AccountCommand, AccountQuery, DirectoryCommand, DirectoryQuery, ImportCommand,
};
use crate::domain::{AccountService, DirectoryService, ImportService};
use crate::outbound::persistence::{
    InMemoryAccountRepository, InMemoryOwnerRepository, InMemoryTenantRepository,
    InMemoryUnitRepository,
};

/// Bundle of the in-memory repositories backing one state instance.
///
/// Kept separate from [`HttpState`] so callers can seed the concrete stores
/// before the services type-erase them behind ports.
#[derive(Default)]
pub struct InMemoryStores {
    /// Unit collection.
    pub units: Arc<InMemoryUnitRepository>,
    /// Owner collection.
    pub owners: Arc<InMemoryOwnerRepository>,
    /// Tenant collection.
    pub tenants: Arc<InMemoryTenantRepository>,
    /// User account collection.
    pub accounts: Arc<InMemoryAccountRepository>,
}

#[cfg(feature = "example-data")]
impl InMemoryStores {
    /// Seed the deterministic example data set.
    pub fn seed_example_data(&self, clock: &dyn Clock) {
        let units = crate::example_data::units();
        self.owners.seed(crate::example_data::owners(&units));
        self.tenants.seed(crate::example_data::tenants(&units));
        self.units.seed(units);
        self.accounts.seed(crate::example_data::accounts(clock));
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Portfolio mutations.
    pub directory: Arc<dyn DirectoryCommand>,
    /// Portfolio reads.
    pub directory_query: Arc<dyn DirectoryQuery>,
    /// CSV import pipeline.
    pub import: Arc<dyn ImportCommand>,
    /// Account mutations.
    pub accounts: Arc<dyn AccountCommand>,
    /// Account reads and authentication.
    pub accounts_query: Arc<dyn AccountQuery>,
}

impl HttpState {
    /// Wire the domain services over the given in-memory stores.
    pub fn from_stores(stores: &InMemoryStores, clock: Arc<dyn Clock>) -> Self {
        let directory = Arc::new(DirectoryService::new(
            Arc::clone(&stores.units),
            Arc::clone(&stores.owners),
            Arc::clone(&stores.tenants),
        ));
        let import = Arc::new(ImportService::new(
            Arc::clone(&stores.units),
            Arc::clone(&stores.owners),
            Arc::clone(&stores.tenants),
        ));
        let accounts = Arc::new(AccountService::new(Arc::clone(&stores.accounts), clock));

        Self {
            directory: Arc::clone(&directory) as Arc<dyn DirectoryCommand>,
            directory_query: directory,
            import,
            accounts: Arc::clone(&accounts) as Arc<dyn AccountCommand>,
            accounts_query: accounts,
        }
    }

    /// Fresh, empty state with the system clock.
    pub fn in_memory() -> Self {
        Self::from_stores(&InMemoryStores::default(), Arc::new(DefaultClock))
    }
}
