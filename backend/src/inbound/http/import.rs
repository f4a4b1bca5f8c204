//! CSV import handlers.
//!
//! ```text
//! GET  /api/v1/import/units/template   -> text/csv template download
//! POST /api/v1/import/units/preview    <- raw CSV text, -> first rows
//! POST /api/v1/import/units            <- raw CSV text, -> import report
//! ```
//!
//! The upload body is the complete file text; the client reads the file and
//! submits it in one request, so the pipeline always runs over full input.

use actix_web::{HttpResponse, get, post, web};
use tracing::info;

use crate::domain::ports::ImportCommand;
use crate::domain::{Error, ImportKind, ImportReport, Role, import};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::require_role;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

fn parse_kind(raw: &str) -> Result<ImportKind, Error> {
    raw.parse::<ImportKind>()
        .map_err(|err| Error::not_found(err.to_string()))
}

/// Download the CSV template for an import kind.
#[utoipa::path(
    get,
    path = "/api/v1/import/{kind}/template",
    params(("kind" = String, Path, description = "units | owners | tenants")),
    responses(
        (status = 200, description = "CSV template", content_type = "text/csv"),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "Unknown import kind", body = Error)
    ),
    tags = ["import"],
    operation_id = "importTemplate"
)]
#[get("/import/{kind}/template")]
pub async fn template(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let kind = parse_kind(&path.into_inner())?;
    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{kind}_template.csv\""),
        ))
        .body(kind.template()))
}

/// Preview the first rows of an upload before importing it.
#[utoipa::path(
    post,
    path = "/api/v1/import/{kind}/preview",
    params(("kind" = String, Path, description = "units | owners | tenants")),
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Parsed rows, header first", body = Vec<Vec<String>>),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "Unknown import kind", body = Error)
    ),
    tags = ["import"],
    operation_id = "importPreview"
)]
#[post("/import/{kind}/preview")]
pub async fn preview(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: String,
) -> ApiResult<web::Json<Vec<Vec<String>>>> {
    require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    parse_kind(&path.into_inner())?;
    Ok(web::Json(import::preview(&body)))
}

/// Run one import batch over the uploaded text.
#[utoipa::path(
    post,
    path = "/api/v1/import/{kind}",
    params(("kind" = String, Path, description = "units | owners | tenants")),
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import report", body = ImportReport),
        (status = 401, description = "Not logged in", body = Error),
        (status = 403, description = "Manager role required", body = Error),
        (status = 404, description = "Unknown import kind", body = Error)
    ),
    tags = ["import"],
    operation_id = "runImport"
)]
#[post("/import/{kind}")]
pub async fn run_import(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: String,
) -> ApiResult<web::Json<ImportReport>> {
    let account =
        require_role(&session, state.accounts_query.as_ref(), Some(Role::Manager)).await?;
    let kind = parse_kind(&path.into_inner())?;

    let report = state.import.import(kind, &body).await?;
    info!(
        account = %account.email(),
        kind = %kind,
        messages = report.display_messages().join("; "),
        "import batch finished"
    );
    Ok(web::Json(report))
}
