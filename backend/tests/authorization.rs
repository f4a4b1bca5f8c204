//! Role-gated access over the HTTP surface.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use serde_json::{Value, json};

use backend::inbound::http::test_utils::{login_as, seeded_test_app};

#[actix_web::test]
async fn anonymous_requests_are_unauthorised() {
    let app = actix_test::init_service(seeded_test_app()).await;

    for uri in ["/api/v1/units", "/api/v1/owners", "/api/v1/users", "/api/v1/profile"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri(uri).to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "GET {uri}");
    }
}

#[actix_web::test]
async fn viewer_reads_but_never_writes() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let cookie = login_as(&app, "viewer@strata.com", "viewer123").await;

    for uri in ["/api/v1/units", "/api/v1/owners", "/api/v1/tenants"] {
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(uri)
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    }

    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/units")
            .cookie(cookie.clone())
            .set_json(json!({ "number": "301", "floor": "3" }))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::FORBIDDEN);

    let users = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(users.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn manager_mutates_the_portfolio_but_not_users() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/units")
            .cookie(cookie.clone())
            .set_json(json!({ "number": "301", "floor": "3", "size": 640 }))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::CREATED);

    let users = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(users.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn admin_passes_every_gate() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let cookie = login_as(&app, "admin@strata.com", "admin123").await;

    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/units")
            .cookie(cookie.clone())
            .set_json(json!({ "number": "401", "floor": "4" }))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::CREATED);

    let users = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(users.status(), StatusCode::OK);
}

#[actix_web::test]
async fn approval_unlocks_protected_screens() {
    let app = actix_test::init_service(seeded_test_app()).await;

    let register = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/auth/register")
            .set_json(json!({
                "email": "pending@strata.com",
                "password": "pw123456",
                "name": "Pending User",
            }))
            .to_request(),
    )
    .await;
    assert_eq!(register.status(), StatusCode::CREATED);
    let created: Value =
        serde_json::from_slice(&actix_test::read_body(register).await).expect("account payload");
    let id = created["id"].as_str().expect("account id").to_owned();

    // Login succeeds, but protected screens refuse the pending account.
    let pending_cookie = login_as(&app, "pending@strata.com", "pw123456").await;
    let refused = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/units")
            .cookie(pending_cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(refused.status(), StatusCode::FORBIDDEN);
    let value: Value =
        serde_json::from_slice(&actix_test::read_body(refused).await).expect("error payload");
    assert_eq!(value["message"].as_str(), Some("account pending approval"));

    let admin_cookie = login_as(&app, "admin@strata.com", "admin123").await;
    let approve = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri(&format!("/api/v1/users/{id}/approve"))
            .cookie(admin_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(approve.status(), StatusCode::OK);

    let allowed = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/units")
            .cookie(pending_cookie)
            .to_request(),
    )
    .await;
    assert_eq!(allowed.status(), StatusCode::OK);
}

#[actix_web::test]
async fn role_changes_take_effect_on_the_next_request() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let admin_cookie = login_as(&app, "admin@strata.com", "admin123").await;

    // Find the seeded viewer and promote them to manager.
    let users_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/users")
            .cookie(admin_cookie.clone())
            .to_request(),
    )
    .await;
    let users: Value =
        serde_json::from_slice(&actix_test::read_body(users_res).await).expect("user list");
    let viewer = users
        .as_array()
        .expect("array payload")
        .iter()
        .find(|user| user["email"] == "viewer@strata.com")
        .expect("seeded viewer")
        .clone();
    let id = viewer["id"].as_str().expect("account id").to_owned();

    let promote = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/users/{id}"))
            .cookie(admin_cookie)
            .set_json(json!({ "role": "manager" }))
            .to_request(),
    )
    .await;
    assert_eq!(promote.status(), StatusCode::OK);

    let cookie = login_as(&app, "viewer@strata.com", "viewer123").await;
    let create = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/units")
            .cookie(cookie)
            .set_json(json!({ "number": "501", "floor": "5" }))
            .to_request(),
    )
    .await;
    assert_eq!(create.status(), StatusCode::CREATED);
}
