//! End-to-end import flows over the HTTP surface.

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use mockable::DefaultClock;
use serde_json::Value;
use std::sync::Arc;

use backend::example_data;
use backend::inbound::http::state::{HttpState, InMemoryStores};
use backend::inbound::http::test_utils::{login_as, seeded_test_app, test_app};

/// Stores holding only the seed accounts: every collection starts empty.
fn accounts_only_state() -> HttpState {
    let stores = InMemoryStores::default();
    stores.accounts.seed(example_data::accounts(&DefaultClock));
    HttpState::from_stores(&stores, Arc::new(DefaultClock))
}

#[actix_web::test]
async fn downloaded_template_imports_into_an_empty_portfolio() {
    let app = actix_test::init_service(test_app(accounts_only_state())).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    let template_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/import/units/template")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(template_res.status(), StatusCode::OK);
    let template = actix_test::read_body(template_res).await;

    let import_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/import/units")
            .cookie(cookie.clone())
            .set_payload(template)
            .to_request(),
    )
    .await;
    assert_eq!(import_res.status(), StatusCode::OK);
    let report: Value =
        serde_json::from_slice(&actix_test::read_body(import_res).await).expect("import report");
    assert_eq!(report["successCount"].as_u64(), Some(2));
    assert_eq!(report["errorCount"].as_u64(), Some(0));
    assert_eq!(report["messages"].as_array().map(Vec::len), Some(0));

    let list_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/units")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let units: Value =
        serde_json::from_slice(&actix_test::read_body(list_res).await).expect("unit list");
    let units = units.as_array().expect("array payload");
    assert_eq!(units.len(), 2);
    let unit_101 = units
        .iter()
        .find(|unit| unit["number"] == "101")
        .expect("unit 101 imported");
    assert_eq!(unit_101["size"].as_u64(), Some(950));
    assert_eq!(unit_101["bedrooms"].as_u64(), Some(2));
}

#[actix_web::test]
async fn bad_rows_are_reported_without_blocking_the_batch() {
    let app = actix_test::init_service(test_app(accounts_only_state())).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    let body = "number,floor,size,bedrooms,bathrooms,lockers,parkingSpots,bikeStorage\n\
                101,1,950,2,1,1,1,0\n\
                102,1\n\
                101,2,800,1,1,0,0,0\n\
                103,1,700,1,1,0,0,0";
    let import_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/import/units")
            .cookie(cookie)
            .set_payload(body)
            .to_request(),
    )
    .await;
    let report: Value =
        serde_json::from_slice(&actix_test::read_body(import_res).await).expect("import report");
    assert_eq!(report["successCount"].as_u64(), Some(2));
    assert_eq!(report["errorCount"].as_u64(), Some(2));
    assert_eq!(
        report["messages"],
        serde_json::json!([
            "Row 3 has too few columns",
            "Unit with number 101 already exists",
        ])
    );
}

#[actix_web::test]
async fn missing_header_aborts_before_any_row_is_applied() {
    let app = actix_test::init_service(test_app(accounts_only_state())).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    let import_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/import/units")
            .cookie(cookie.clone())
            .set_payload("number,floor\n101,1")
            .to_request(),
    )
    .await;
    let report: Value =
        serde_json::from_slice(&actix_test::read_body(import_res).await).expect("import report");
    assert_eq!(report["successCount"].as_u64(), Some(0));
    assert_eq!(report["errorCount"].as_u64(), Some(1));
    let message = report["messages"][0].as_str().expect("one message");
    assert!(message.starts_with("Missing required headers: "));

    let list_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/units")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let units: Value =
        serde_json::from_slice(&actix_test::read_body(list_res).await).expect("unit list");
    assert_eq!(units.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn owner_import_respects_referential_rules_of_the_seeded_portfolio() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    // 101 already has an owner; 999 does not exist.
    let body = "firstName,lastName,email,phone,unitNumber,mailingAddress,hasDog,hasCat\n\
                Eve,Taylor,eve@example.com,555-111-2222,101,1 Elm St,false,false\n\
                Mark,Lee,mark@example.com,555-333-4444,999,2 Elm St,false,false";
    let import_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/v1/import/owners")
            .cookie(cookie)
            .set_payload(body)
            .to_request(),
    )
    .await;
    let report: Value =
        serde_json::from_slice(&actix_test::read_body(import_res).await).expect("import report");
    assert_eq!(report["successCount"].as_u64(), Some(0));
    assert_eq!(report["errorCount"].as_u64(), Some(2));
    assert_eq!(
        report["messages"],
        serde_json::json!([
            "An owner already exists for unit 101",
            "Unit with number 999 does not exist",
        ])
    );
}

#[actix_web::test]
async fn deleting_a_unit_leaves_no_orphaned_owner_or_tenants() {
    let app = actix_test::init_service(seeded_test_app()).await;
    let cookie = login_as(&app, "manager@strata.com", "manager123").await;

    let list_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/units")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let units: Value =
        serde_json::from_slice(&actix_test::read_body(list_res).await).expect("unit list");
    let unit_101 = units
        .as_array()
        .expect("array payload")
        .iter()
        .find(|unit| unit["number"] == "101")
        .expect("seeded unit 101")
        .clone();
    let id = unit_101["id"].as_str().expect("unit id").to_owned();

    let delete_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/units/{id}"))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(delete_res.status(), StatusCode::NO_CONTENT);

    let owners_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/owners")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let owners: Value =
        serde_json::from_slice(&actix_test::read_body(owners_res).await).expect("owner list");
    assert!(
        owners
            .as_array()
            .expect("array payload")
            .iter()
            .all(|owner| owner["unitId"] != id.as_str())
    );

    let tenants_res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/tenants")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let tenants: Value =
        serde_json::from_slice(&actix_test::read_body(tenants_res).await).expect("tenant list");
    assert!(
        tenants
            .as_array()
            .expect("array payload")
            .iter()
            .all(|tenant| tenant["unitId"] != id.as_str())
    );
}
