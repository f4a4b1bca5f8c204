//! Deterministic example data set.
//!
//! Mirrors the demonstration portfolio the product ships with: three units,
//! their owners, two tenants, and one seed account per role. Compiled only
//! with the `example-data` feature and applied at startup when
//! `STRATA_SEED_EXAMPLE_DATA=1`.

use mockable::Clock;

use crate::domain::{
    Owner, OwnerId, Role, Tenant, TenantId, Unit, UnitId, UserAccount,
};

/// The demonstration units: 101, 102, and 201.
pub fn units() -> Vec<Unit> {
    vec![
        Unit {
            id: UnitId::random(),
            number: "101".to_owned(),
            floor: "1".to_owned(),
            size: 950,
            bedrooms: 2,
            bathrooms: 1,
            lockers: 1,
            parking_spots: 1,
            bike_storage: 0,
        },
        Unit {
            id: UnitId::random(),
            number: "102".to_owned(),
            floor: "1".to_owned(),
            size: 1200,
            bedrooms: 3,
            bathrooms: 2,
            lockers: 2,
            parking_spots: 2,
            bike_storage: 1,
        },
        Unit {
            id: UnitId::random(),
            number: "201".to_owned(),
            floor: "2".to_owned(),
            size: 850,
            bedrooms: 1,
            bathrooms: 1,
            lockers: 1,
            parking_spots: 1,
            bike_storage: 1,
        },
    ]
}

fn unit_id(units: &[Unit], number: &str) -> UnitId {
    units
        .iter()
        .find(|unit| unit.number == number)
        .map(|unit| unit.id)
        .unwrap_or_else(|| panic!("example data unit {number} missing"))
}

/// One owner of record per demonstration unit.
///
/// # Panics
/// Panics when `units` does not contain the demonstration unit numbers.
pub fn owners(units: &[Unit]) -> Vec<Owner> {
    vec![
        Owner {
            id: OwnerId::random(),
            unit_id: unit_id(units, "101"),
            first_name: "John".to_owned(),
            last_name: "Smith".to_owned(),
            email: "john.smith@example.com".to_owned(),
            phone: "555-123-4567".to_owned(),
            mailing_address: "123 Main St, Anytown, CA 90210".to_owned(),
            has_dog: true,
            has_cat: false,
        },
        Owner {
            id: OwnerId::random(),
            unit_id: unit_id(units, "102"),
            first_name: "Alice".to_owned(),
            last_name: "Johnson".to_owned(),
            email: "alice.johnson@example.com".to_owned(),
            phone: "555-234-5678".to_owned(),
            mailing_address: "456 Oak Ave, Somewhere, NY 10001".to_owned(),
            has_dog: false,
            has_cat: true,
        },
        Owner {
            id: OwnerId::random(),
            unit_id: unit_id(units, "201"),
            first_name: "Robert".to_owned(),
            last_name: "Williams".to_owned(),
            email: "robert.williams@example.com".to_owned(),
            phone: "555-345-6789".to_owned(),
            mailing_address: "789 Pine Blvd, Nowhere, FL 33101".to_owned(),
            has_dog: false,
            has_cat: false,
        },
    ]
}

/// The demonstration tenants for units 101 and 201.
///
/// # Panics
/// Panics when `units` does not contain the demonstration unit numbers.
pub fn tenants(units: &[Unit]) -> Vec<Tenant> {
    vec![
        Tenant {
            id: TenantId::random(),
            unit_id: unit_id(units, "101"),
            first_name: "Sarah".to_owned(),
            last_name: "Davis".to_owned(),
            email: "sarah.davis@example.com".to_owned(),
            phone: "555-456-7890".to_owned(),
            lease_start: "2023-01-01".to_owned(),
            lease_end: "2023-12-31".to_owned(),
            has_dog: false,
            has_cat: true,
        },
        Tenant {
            id: TenantId::random(),
            unit_id: unit_id(units, "201"),
            first_name: "Michael".to_owned(),
            last_name: "Brown".to_owned(),
            email: "michael.brown@example.com".to_owned(),
            phone: "555-567-8901".to_owned(),
            lease_start: "2023-03-15".to_owned(),
            lease_end: "2024-03-14".to_owned(),
            has_dog: true,
            has_cat: false,
        },
    ]
}

/// One approved seed account per role.
///
/// # Panics
/// Panics when the fixture values fail account validation, which would be a
/// programming error in this module.
pub fn accounts(clock: &dyn Clock) -> Vec<UserAccount> {
    [
        ("admin@strata.com", "admin123", "Admin User", Role::Admin),
        (
            "manager@strata.com",
            "manager123",
            "Manager User",
            Role::Manager,
        ),
        (
            "viewer@strata.com",
            "viewer123",
            "Viewer User",
            Role::Viewer,
        ),
    ]
    .into_iter()
    .map(|(email, password, name, role)| {
        UserAccount::try_new(email, password, name, role, true, clock.utc())
            .unwrap_or_else(|err| panic!("example account must satisfy validation: {err}"))
    })
    .collect()
}
