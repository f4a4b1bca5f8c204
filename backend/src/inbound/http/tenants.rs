//! Tenant CRUD handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery, TenantDraft};
use crate::domain::{Error, Role, Tenant, TenantId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List every tenant.
#[utoipa::path(
    get,
    path = "/api/v1/tenants",
    responses(
        (status = 200, description = "Tenants", body = [Tenant]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Account pending approval", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "listTenants"
)]
#[get("/tenants")]
pub async fn list_tenants(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Tenant>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Viewer)).await?;
    Ok(web::Json(state.directory_query.list_tenants().await?))
}

/// Create a tenant.
#[utoipa::path(
    post,
    path = "/api/v1/tenants",
    request_body = TenantDraft,
    responses(
        (status = 201, description = "Created tenant", body = Tenant),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "createTenant"
)]
#[post("/tenants")]
pub async fn create_tenant(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<TenantDraft>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let tenant = state.directory.create_tenant(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(tenant))
}

/// Replace a tenant.
#[utoipa::path(
    put,
    path = "/api/v1/tenants/{id}",
    params(("id" = Uuid, Path, description = "Tenant id")),
    request_body = TenantDraft,
    responses(
        (status = 200, description = "Updated tenant", body = Tenant),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such tenant", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "updateTenant"
)]
#[put("/tenants/{id}")]
pub async fn update_tenant(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<TenantDraft>,
) -> ApiResult<web::Json<Tenant>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let tenant = payload
        .into_inner()
        .into_tenant(TenantId::from(path.into_inner()));
    Ok(web::Json(state.directory.update_tenant(tenant).await?))
}

/// Delete a tenant.
#[utoipa::path(
    delete,
    path = "/api/v1/tenants/{id}",
    params(("id" = Uuid, Path, description = "Tenant id")),
    responses(
        (status = 204, description = "Tenant removed"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such tenant", body = Error)
    ),
    tags = ["tenants"],
    operation_id = "deleteTenant"
)]
#[delete("/tenants/{id}")]
pub async fn delete_tenant(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    state
        .directory
        .delete_tenant(TenantId::from(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
