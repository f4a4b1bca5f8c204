//! Owner CRUD handlers.

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery, OwnerDraft};
use crate::domain::{Error, Owner, OwnerId, Role};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List every owner.
#[utoipa::path(
    get,
    path = "/api/v1/owners",
    responses(
        (status = 200, description = "Owners", body = [Owner]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Account pending approval", body = Error)
    ),
    tags = ["owners"],
    operation_id = "listOwners"
)]
#[get("/owners")]
pub async fn list_owners(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Owner>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Viewer)).await?;
    Ok(web::Json(state.directory_query.list_owners().await?))
}

/// Create an owner.
#[utoipa::path(
    post,
    path = "/api/v1/owners",
    request_body = OwnerDraft,
    responses(
        (status = 201, description = "Created owner", body = Owner),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error)
    ),
    tags = ["owners"],
    operation_id = "createOwner"
)]
#[post("/owners")]
pub async fn create_owner(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<OwnerDraft>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let owner = state.directory.create_owner(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(owner))
}

/// Replace an owner.
#[utoipa::path(
    put,
    path = "/api/v1/owners/{id}",
    params(("id" = Uuid, Path, description = "Owner id")),
    request_body = OwnerDraft,
    responses(
        (status = 200, description = "Updated owner", body = Owner),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such owner", body = Error)
    ),
    tags = ["owners"],
    operation_id = "updateOwner"
)]
#[put("/owners/{id}")]
pub async fn update_owner(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<OwnerDraft>,
) -> ApiResult<web::Json<Owner>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let owner = payload
        .into_inner()
        .into_owner(OwnerId::from(path.into_inner()));
    Ok(web::Json(state.directory.update_owner(owner).await?))
}

/// Delete an owner.
#[utoipa::path(
    delete,
    path = "/api/v1/owners/{id}",
    params(("id" = Uuid, Path, description = "Owner id")),
    responses(
        (status = 204, description = "Owner removed"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such owner", body = Error)
    ),
    tags = ["owners"],
    operation_id = "deleteOwner"
)]
#[delete("/owners/{id}")]
pub async fn delete_owner(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    state
        .directory
        .delete_owner(OwnerId::from(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
