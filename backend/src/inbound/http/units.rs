//! Unit CRUD handlers.
//!
//! Reads need the viewer role; mutations need manager. Deleting a unit
//! cascades to its owner and tenants via the directory service.

use actix_web::{HttpResponse, delete, get, post, put, web};
use uuid::Uuid;

use crate::domain::ports::{DirectoryCommand, DirectoryQuery, UnitDetail, UnitDraft};
use crate::domain::{Error, Role, Unit, UnitId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// List every unit.
#[utoipa::path(
    get,
    path = "/api/v1/units",
    responses(
        (status = 200, description = "Units", body = [Unit]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Account pending approval", body = Error)
    ),
    tags = ["units"],
    operation_id = "listUnits"
)]
#[get("/units")]
pub async fn list_units(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<Unit>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Viewer)).await?;
    Ok(web::Json(state.directory_query.list_units().await?))
}

/// One unit with its owner of record and tenants.
#[utoipa::path(
    get,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit id")),
    responses(
        (status = 200, description = "Unit detail", body = UnitDetail),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Account pending approval", body = Error),
        (status = 404, description = "No such unit", body = Error)
    ),
    tags = ["units"],
    operation_id = "unitDetail"
)]
#[get("/units/{id}")]
pub async fn unit_detail(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<UnitDetail>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Viewer)).await?;
    let detail = state
        .directory_query
        .unit_detail(UnitId::from(path.into_inner()))
        .await?;
    Ok(web::Json(detail))
}

/// Create a unit.
#[utoipa::path(
    post,
    path = "/api/v1/units",
    request_body = UnitDraft,
    responses(
        (status = 201, description = "Created unit", body = Unit),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error)
    ),
    tags = ["units"],
    operation_id = "createUnit"
)]
#[post("/units")]
pub async fn create_unit(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<UnitDraft>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let unit = state.directory.create_unit(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(unit))
}

/// Replace a unit.
#[utoipa::path(
    put,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit id")),
    request_body = UnitDraft,
    responses(
        (status = 200, description = "Updated unit", body = Unit),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such unit", body = Error)
    ),
    tags = ["units"],
    operation_id = "updateUnit"
)]
#[put("/units/{id}")]
pub async fn update_unit(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UnitDraft>,
) -> ApiResult<web::Json<Unit>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let unit = payload
        .into_inner()
        .into_unit(UnitId::from(path.into_inner()));
    Ok(web::Json(state.directory.update_unit(unit).await?))
}

/// Delete a unit and cascade to its owner and tenants.
#[utoipa::path(
    delete,
    path = "/api/v1/units/{id}",
    params(("id" = Uuid, Path, description = "Unit id")),
    responses(
        (status = 204, description = "Unit and its owner/tenants removed"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "No such unit", body = Error)
    ),
    tags = ["units"],
    operation_id = "deleteUnit"
)]
#[delete("/units/{id}")]
pub async fn delete_unit(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    state
        .directory
        .delete_unit(UnitId::from(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
