//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod auth;
pub mod error;
pub mod health;
pub mod import;
pub mod owners;
pub mod session;
pub mod state;
pub mod tenants;
#[cfg(any(test, feature = "test-support"))]
pub mod test_utils;
pub mod units;
pub mod users;

pub use error::ApiResult;

/// Assemble every `/api/v1` route.
///
/// Session middleware is applied by the caller so the server and the test
/// harnesses can configure cookies differently. Registration order matters
/// for the literal `/users/pending` segment, which must win over
/// `/users/{id}`.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .service(auth::register)
        .service(auth::login)
        .service(auth::logout)
        .service(users::profile)
        .service(users::list_pending_users)
        .service(users::list_users)
        .service(users::create_user)
        .service(users::approve_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(units::list_units)
        .service(units::unit_detail)
        .service(units::create_unit)
        .service(units::update_unit)
        .service(units::delete_unit)
        .service(owners::list_owners)
        .service(owners::create_owner)
        .service(owners::update_owner)
        .service(owners::delete_owner)
        .service(tenants::list_tenants)
        .service(tenants::create_tenant)
        .service(tenants::update_tenant)
        .service(tenants::delete_tenant)
        .service(import::template)
        .service(import::preview)
        .service(import::run_import)
}
