//! OpenAPI documentation configuration.
//!
//! Defines the [`ApiDoc`] struct which generates the OpenAPI specification
//! for the REST API: every HTTP endpoint from the inbound layer, the shared
//! schemas, and the session cookie security scheme. The generated document
//! backs Swagger UI in debug builds.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::ports::{
    NewUserDraft, OwnerDraft, RegistrationDraft, TenantDraft, UnitDetail, UnitDraft, UserUpdate,
};
use crate::domain::{Error, ErrorCode, ImportKind, ImportReport, Owner, Role, Tenant, Unit};
use crate::inbound::http::auth::LoginRequest;
use crate::inbound::http::users::UserDto;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/auth/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Strata management backend API",
        description = "HTTP interface for session-authenticated property management: \
                       units, owners, tenants, user accounts, and CSV bulk import."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::logout,
        crate::inbound::http::users::profile,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::list_pending_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::approve_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::units::list_units,
        crate::inbound::http::units::unit_detail,
        crate::inbound::http::units::create_unit,
        crate::inbound::http::units::update_unit,
        crate::inbound::http::units::delete_unit,
        crate::inbound::http::owners::list_owners,
        crate::inbound::http::owners::create_owner,
        crate::inbound::http::owners::update_owner,
        crate::inbound::http::owners::delete_owner,
        crate::inbound::http::tenants::list_tenants,
        crate::inbound::http::tenants::create_tenant,
        crate::inbound::http::tenants::update_tenant,
        crate::inbound::http::tenants::delete_tenant,
        crate::inbound::http::import::template,
        crate::inbound::http::import::preview,
        crate::inbound::http::import::run_import,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        Unit,
        Owner,
        Tenant,
        UnitDraft,
        OwnerDraft,
        TenantDraft,
        UnitDetail,
        UserDto,
        LoginRequest,
        RegistrationDraft,
        NewUserDraft,
        UserUpdate,
        ImportKind,
        ImportReport,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_builds_and_lists_the_import_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|path| *path == "/api/v1/import/{kind}"));
        assert!(
            paths
                .iter()
                .any(|path| *path == "/api/v1/import/{kind}/template")
        );
        assert!(paths.iter().any(|path| *path == "/api/v1/units/{id}"));
    }
}
