//! Authentication handlers and the authorization guard.
//!
//! ```text
//! POST /api/v1/auth/register {"email":"new@strata.com","password":"pw","name":"New User"}
//! POST /api/v1/auth/login {"email":"admin@strata.com","password":"admin123"}
//! POST /api/v1/auth/logout
//! ```
//!
//! The guard realises the authorization predicate over HTTP: a missing
//! session is `401`, an unapproved account or insufficient role is `403`.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::{AccountCommand, AccountQuery, RegistrationDraft};
use crate::domain::{
    Error, LoginCredentials, LoginValidationError, Role, UserAccount, can_access,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::UserDto;

/// Login request body for `POST /api/v1/auth/login`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyEmail => Error::invalid_request("email must not be empty")
            .with_details(json!({ "field": "email", "code": "empty_email" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Resolve the calling account and check it against the required role.
///
/// Centralises the predicate so handlers state their requirement in one
/// line. A stale cookie whose account no longer exists counts as not being
/// logged in.
pub(crate) async fn require_role(
    session: &SessionContext,
    accounts: &dyn AccountQuery,
    required: Option<Role>,
) -> Result<UserAccount, Error> {
    let id = session.require_account_id()?;
    let account = accounts
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::unauthorized("login required"))?;

    if !can_access(account.role(), account.approved(), required) {
        if !account.approved() {
            return Err(Error::forbidden("account pending approval"));
        }
        return Err(Error::forbidden("insufficient role"));
    }

    Ok(account)
}

/// Register a new account, pending admin approval.
#[utoipa::path(
    post,
    path = "/api/v1/auth/register",
    request_body = RegistrationDraft,
    responses(
        (status = 201, description = "Account created, pending approval", body = UserDto),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Email already in use", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "register",
    security([])
)]
#[post("/auth/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationDraft>,
) -> ApiResult<HttpResponse> {
    let account = state.accounts.register(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(UserDto::from(&account)))
}

/// Authenticate and establish a session.
///
/// Unapproved accounts may log in; every protected endpoint refuses them
/// until an admin approves the account.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = UserDto,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/auth/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let account = state.accounts_query.authenticate(&credentials).await?;
    session.persist_account(account.id())?;
    Ok(HttpResponse::Ok().json(UserDto::from(&account)))
}

/// Drop the session.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    responses(
        (status = 204, description = "Session dropped")
    ),
    tags = ["auth"],
    operation_id = "logout",
    security([])
)]
#[post("/auth/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.purge();
    HttpResponse::NoContent().finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{login_as, seeded_test_app};
    use actix_web::{http::StatusCode, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn login_rejects_blank_email_with_details() {
        let app = actix_test::init_service(seeded_test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "   ".into(),
                password: "pw".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            value["message"].as_str(),
            Some("email must not be empty")
        );
        assert_eq!(value["details"]["field"].as_str(), Some("email"));
    }

    #[actix_web::test]
    async fn login_rejects_wrong_credentials_with_uniform_message() {
        let app = actix_test::init_service(seeded_test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "admin@strata.com".into(),
                password: "wrong-password".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("error payload");
        assert_eq!(
            value["message"].as_str(),
            Some("Invalid email or password")
        );
        assert_eq!(value["code"].as_str(), Some("unauthorized"));
    }

    #[actix_web::test]
    async fn login_returns_the_account_without_its_password() {
        let app = actix_test::init_service(seeded_test_app()).await;

        let request = actix_test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(&LoginRequest {
                email: "admin@strata.com".into(),
                password: "admin123".into(),
            })
            .to_request();

        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(response).await).expect("user payload");
        assert_eq!(value["email"].as_str(), Some("admin@strata.com"));
        assert_eq!(value["role"].as_str(), Some("admin"));
        assert!(value.get("password").is_none());
    }

    #[actix_web::test]
    async fn logout_ends_the_session() {
        let app = actix_test::init_service(seeded_test_app()).await;
        let cookie = login_as(&app, "admin@strata.com", "admin123").await;

        let logout_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/auth/logout")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(logout_res.status(), StatusCode::NO_CONTENT);

        // Without a session cookie, protected reads are refused.
        let profile_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/profile")
                .to_request(),
        )
        .await;
        assert_eq!(profile_res.status(), StatusCode::UNAUTHORIZED);
    }
}
