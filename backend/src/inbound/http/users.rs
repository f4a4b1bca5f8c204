//! User administration and profile handlers.
//!
//! Every endpoint here except `GET /profile` requires the admin role. The
//! pending list and the approve operation drive the approval workflow: a
//! freshly registered account shows up under `/users/pending` until an admin
//! approves or rejects (deletes) it.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::ports::{AccountCommand, AccountQuery, NewUserDraft, UserUpdate};
use crate::domain::{AccountId, Error, Role, UserAccount};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Outbound representation of a user account. Never carries the password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// Stable account identifier.
    pub id: AccountId,
    /// Login email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Access tier.
    pub role: Role,
    /// Whether an admin has approved the account.
    pub approved: bool,
    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<&UserAccount> for UserDto {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id(),
            email: account.email().to_owned(),
            name: account.name().to_owned(),
            role: account.role(),
            approved: account.approved(),
            created_at: account.created_at(),
        }
    }
}

fn to_dtos(accounts: &[UserAccount]) -> Vec<UserDto> {
    accounts.iter().map(UserDto::from).collect()
}

/// The calling account.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    responses(
        (status = 200, description = "The calling account", body = UserDto),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Account pending approval", body = Error)
    ),
    tags = ["users"],
    operation_id = "profile"
)]
#[get("/profile")]
pub async fn profile(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<UserDto>> {
    let account = require_role(&session, state.accounts_query.as_ref(), None).await?;
    Ok(web::Json(UserDto::from(&account)))
}

/// List every account.
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "Accounts", body = [UserDto]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserDto>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    let accounts = state.accounts_query.list_users().await?;
    Ok(web::Json(to_dtos(&accounts)))
}

/// List accounts awaiting approval.
#[utoipa::path(
    get,
    path = "/api/v1/users/pending",
    responses(
        (status = 200, description = "Accounts awaiting approval", body = [UserDto]),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error)
    ),
    tags = ["users"],
    operation_id = "listPendingUsers"
)]
#[get("/users/pending")]
pub async fn list_pending_users(
    session: SessionContext,
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<UserDto>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    let accounts = state.accounts_query.pending_users().await?;
    Ok(web::Json(to_dtos(&accounts)))
}

/// Create an account with an explicit role.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = NewUserDraft,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error),
        (status = 409, description = "Email already in use", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<NewUserDraft>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    let account = state.accounts.create_user(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserDto::from(&account)))
}

/// Apply a partial update to an account.
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "Account id")),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error),
        (status = 404, description = "No such account", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
    payload: web::Json<UserUpdate>,
) -> ApiResult<web::Json<UserDto>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    let account = state
        .accounts
        .update_user(AccountId::from(path.into_inner()), payload.into_inner())
        .await?;
    Ok(web::Json(UserDto::from(&account)))
}

/// Approve a pending account.
#[utoipa::path(
    post,
    path = "/api/v1/users/{id}/approve",
    params(("id" = Uuid, Path, description = "Account id")),
    responses(
        (status = 200, description = "Approved account", body = UserDto),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error),
        (status = 404, description = "No such account", body = Error)
    ),
    tags = ["users"],
    operation_id = "approveUser"
)]
#[post("/users/{id}/approve")]
pub async fn approve_user(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<web::Json<UserDto>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    let account = state
        .accounts
        .approve_user(AccountId::from(path.into_inner()))
        .await?;
    Ok(web::Json(UserDto::from(&account)))
}

/// Delete (or reject) an account.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    params(("id" = Uuid, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account removed"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Admin role required", body = Error),
        (status = 404, description = "No such account", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<Uuid>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Admin)).await?;
    state
        .accounts
        .delete_user(AccountId::from(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
