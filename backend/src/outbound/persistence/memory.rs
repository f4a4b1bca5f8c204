//! `RwLock`-guarded vector repositories.
//!
//! Records keep insertion order, matching what the screens display. Lock
//! poisoning is surfaced as a store error rather than a panic so one failed
//! writer cannot wedge every subsequent request.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::ports::{
    AccountRepository, AccountStoreError, OwnerRepository, OwnerStoreError, TenantRepository,
    TenantStoreError, UnitRepository, UnitStoreError,
};
use crate::domain::{
    AccountId, Owner, OwnerId, Tenant, TenantId, Unit, UnitId, UserAccount,
};

const POISONED: &str = "store lock poisoned";

/// In-memory unit collection.
#[derive(Debug, Default)]
pub struct InMemoryUnitRepository {
    units: RwLock<Vec<Unit>>,
}

impl InMemoryUnitRepository {
    /// Append records without going through the port, for seeding.
    pub fn seed(&self, units: impl IntoIterator<Item = Unit>) {
        if let Ok(mut guard) = self.units.write() {
            guard.extend(units);
        }
    }
}

#[async_trait]
impl UnitRepository for InMemoryUnitRepository {
    async fn list(&self) -> Result<Vec<Unit>, UnitStoreError> {
        let units = self.units.read().map_err(|_| UnitStoreError::query(POISONED))?;
        Ok(units.clone())
    }

    async fn find_by_id(&self, id: UnitId) -> Result<Option<Unit>, UnitStoreError> {
        let units = self.units.read().map_err(|_| UnitStoreError::query(POISONED))?;
        Ok(units.iter().find(|unit| unit.id == id).cloned())
    }

    async fn find_by_number(&self, number: &str) -> Result<Option<Unit>, UnitStoreError> {
        let units = self.units.read().map_err(|_| UnitStoreError::query(POISONED))?;
        Ok(units.iter().find(|unit| unit.number == number).cloned())
    }

    async fn insert(&self, unit: Unit) -> Result<(), UnitStoreError> {
        let mut units = self
            .units
            .write()
            .map_err(|_| UnitStoreError::query(POISONED))?;
        units.push(unit);
        Ok(())
    }

    async fn update(&self, unit: Unit) -> Result<bool, UnitStoreError> {
        let mut units = self
            .units
            .write()
            .map_err(|_| UnitStoreError::query(POISONED))?;
        match units.iter_mut().find(|existing| existing.id == unit.id) {
            Some(existing) => {
                *existing = unit;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UnitId) -> Result<bool, UnitStoreError> {
        let mut units = self
            .units
            .write()
            .map_err(|_| UnitStoreError::query(POISONED))?;
        let before = units.len();
        units.retain(|unit| unit.id != id);
        Ok(units.len() < before)
    }
}

/// In-memory owner collection.
#[derive(Debug, Default)]
pub struct InMemoryOwnerRepository {
    owners: RwLock<Vec<Owner>>,
}

impl InMemoryOwnerRepository {
    /// Append records without going through the port, for seeding.
    pub fn seed(&self, owners: impl IntoIterator<Item = Owner>) {
        if let Ok(mut guard) = self.owners.write() {
            guard.extend(owners);
        }
    }
}

#[async_trait]
impl OwnerRepository for InMemoryOwnerRepository {
    async fn list(&self) -> Result<Vec<Owner>, OwnerStoreError> {
        let owners = self
            .owners
            .read()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        Ok(owners.clone())
    }

    async fn find_by_id(&self, id: OwnerId) -> Result<Option<Owner>, OwnerStoreError> {
        let owners = self
            .owners
            .read()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        Ok(owners.iter().find(|owner| owner.id == id).cloned())
    }

    async fn find_by_unit(&self, unit_id: UnitId) -> Result<Option<Owner>, OwnerStoreError> {
        let owners = self
            .owners
            .read()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        Ok(owners.iter().find(|owner| owner.unit_id == unit_id).cloned())
    }

    async fn insert(&self, owner: Owner) -> Result<(), OwnerStoreError> {
        let mut owners = self
            .owners
            .write()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        owners.push(owner);
        Ok(())
    }

    async fn update(&self, owner: Owner) -> Result<bool, OwnerStoreError> {
        let mut owners = self
            .owners
            .write()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        match owners.iter_mut().find(|existing| existing.id == owner.id) {
            Some(existing) => {
                *existing = owner;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: OwnerId) -> Result<bool, OwnerStoreError> {
        let mut owners = self
            .owners
            .write()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        let before = owners.len();
        owners.retain(|owner| owner.id != id);
        Ok(owners.len() < before)
    }

    async fn delete_by_unit(&self, unit_id: UnitId) -> Result<usize, OwnerStoreError> {
        let mut owners = self
            .owners
            .write()
            .map_err(|_| OwnerStoreError::query(POISONED))?;
        let before = owners.len();
        owners.retain(|owner| owner.unit_id != unit_id);
        Ok(before - owners.len())
    }
}

/// In-memory tenant collection.
#[derive(Debug, Default)]
pub struct InMemoryTenantRepository {
    tenants: RwLock<Vec<Tenant>>,
}

impl InMemoryTenantRepository {
    /// Append records without going through the port, for seeding.
    pub fn seed(&self, tenants: impl IntoIterator<Item = Tenant>) {
        if let Ok(mut guard) = self.tenants.write() {
            guard.extend(tenants);
        }
    }
}

#[async_trait]
impl TenantRepository for InMemoryTenantRepository {
    async fn list(&self) -> Result<Vec<Tenant>, TenantStoreError> {
        let tenants = self
            .tenants
            .read()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        Ok(tenants.clone())
    }

    async fn find_by_id(&self, id: TenantId) -> Result<Option<Tenant>, TenantStoreError> {
        let tenants = self
            .tenants
            .read()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        Ok(tenants.iter().find(|tenant| tenant.id == id).cloned())
    }

    async fn list_by_unit(&self, unit_id: UnitId) -> Result<Vec<Tenant>, TenantStoreError> {
        let tenants = self
            .tenants
            .read()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        Ok(tenants
            .iter()
            .filter(|tenant| tenant.unit_id == unit_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, tenant: Tenant) -> Result<(), TenantStoreError> {
        let mut tenants = self
            .tenants
            .write()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        tenants.push(tenant);
        Ok(())
    }

    async fn update(&self, tenant: Tenant) -> Result<bool, TenantStoreError> {
        let mut tenants = self
            .tenants
            .write()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        match tenants.iter_mut().find(|existing| existing.id == tenant.id) {
            Some(existing) => {
                *existing = tenant;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: TenantId) -> Result<bool, TenantStoreError> {
        let mut tenants = self
            .tenants
            .write()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        let before = tenants.len();
        tenants.retain(|tenant| tenant.id != id);
        Ok(tenants.len() < before)
    }

    async fn delete_by_unit(&self, unit_id: UnitId) -> Result<usize, TenantStoreError> {
        let mut tenants = self
            .tenants
            .write()
            .map_err(|_| TenantStoreError::query(POISONED))?;
        let before = tenants.len();
        tenants.retain(|tenant| tenant.unit_id != unit_id);
        Ok(before - tenants.len())
    }
}

/// In-memory user account collection.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<UserAccount>>,
}

impl InMemoryAccountRepository {
    /// Append records without going through the port, for seeding.
    pub fn seed(&self, accounts: impl IntoIterator<Item = UserAccount>) {
        if let Ok(mut guard) = self.accounts.write() {
            guard.extend(accounts);
        }
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn list(&self) -> Result<Vec<UserAccount>, AccountStoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        Ok(accounts.clone())
    }

    async fn find_by_id(&self, id: AccountId) -> Result<Option<UserAccount>, AccountStoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        Ok(accounts.iter().find(|account| account.id() == id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserAccount>, AccountStoreError> {
        let accounts = self
            .accounts
            .read()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        Ok(accounts
            .iter()
            .find(|account| account.email() == email)
            .cloned())
    }

    async fn insert(&self, account: UserAccount) -> Result<(), AccountStoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        accounts.push(account);
        Ok(())
    }

    async fn update(&self, account: UserAccount) -> Result<bool, AccountStoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        match accounts
            .iter_mut()
            .find(|existing| existing.id() == account.id())
        {
            Some(existing) => {
                *existing = account;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: AccountId) -> Result<bool, AccountStoreError> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AccountStoreError::query(POISONED))?;
        let before = accounts.len();
        accounts.retain(|account| account.id() != id);
        Ok(accounts.len() < before)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    fn unit(number: &str) -> Unit {
        Unit {
            id: UnitId::random(),
            number: number.to_owned(),
            floor: "1".to_owned(),
            size: 950,
            bedrooms: 2,
            bathrooms: 1,
            lockers: 1,
            parking_spots: 1,
            bike_storage: 0,
        }
    }

    #[tokio::test]
    async fn unit_lookup_by_number_and_id() {
        let repo = InMemoryUnitRepository::default();
        let stored = unit("101");
        repo.insert(stored.clone()).await.expect("insert succeeds");

        assert_eq!(
            repo.find_by_number("101").await.expect("lookup runs"),
            Some(stored.clone())
        );
        assert_eq!(
            repo.find_by_id(stored.id).await.expect("lookup runs"),
            Some(stored)
        );
        assert_eq!(repo.find_by_number("999").await.expect("lookup runs"), None);
    }

    #[tokio::test]
    async fn unit_update_reports_presence() {
        let repo = InMemoryUnitRepository::default();
        let mut stored = unit("101");
        repo.insert(stored.clone()).await.expect("insert succeeds");

        stored.floor = "2".to_owned();
        assert!(repo.update(stored.clone()).await.expect("update runs"));
        assert_eq!(
            repo.find_by_id(stored.id)
                .await
                .expect("lookup runs")
                .map(|unit| unit.floor),
            Some("2".to_owned())
        );

        assert!(!repo.update(unit("999")).await.expect("update runs"));
    }

    #[tokio::test]
    async fn delete_by_unit_reports_the_removed_count() {
        let repo = InMemoryTenantRepository::default();
        let unit_id = UnitId::random();
        for name in ["Sarah", "Michael"] {
            repo.insert(Tenant {
                id: TenantId::random(),
                unit_id,
                first_name: name.to_owned(),
                last_name: "Example".to_owned(),
                email: format!("{}@example.com", name.to_lowercase()),
                phone: String::new(),
                lease_start: String::new(),
                lease_end: String::new(),
                has_dog: false,
                has_cat: false,
            })
            .await
            .expect("insert succeeds");
        }

        let removed = repo.delete_by_unit(unit_id).await.expect("delete runs");
        assert_eq!(removed, 2);
        assert!(repo.list().await.expect("list runs").is_empty());
    }

    #[tokio::test]
    async fn seeding_preserves_insertion_order() {
        let repo = InMemoryUnitRepository::default();
        repo.seed([unit("101"), unit("102")]);
        let numbers: Vec<String> = repo
            .list()
            .await
            .expect("list runs")
            .into_iter()
            .map(|unit| unit.number)
            .collect();
        assert_eq!(numbers, vec!["101".to_owned(), "102".to_owned()]);
    }
}
