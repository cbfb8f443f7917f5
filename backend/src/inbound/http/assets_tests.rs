//! Tests for the asset handlers.

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use serde_json::{json, Value};

use super::*;
use crate::domain::asset::AssetDetails;
use crate::domain::failures::asset_has_dependents;
use crate::domain::test_fixtures::asset;
use crate::inbound::http::identity::MEMBER_ID_HEADER;
use crate::inbound::http::test_utils::TestPorts;

fn app_with(
    ports: TestPorts,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    // `total` before `{id}` so the literal segment wins.
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(create_asset)
        .service(list_assets)
        .service(total_assets)
        .service(get_asset)
        .service(update_asset)
        .service(delete_asset)
}

fn details(balance: i64, owner: Option<i64>, nickname: Option<&str>) -> AssetDetails {
    AssetDetails {
        asset: asset(7, 10, balance, owner),
        owner_nickname: nickname.map(str::to_owned),
    }
}

#[actix_web::test]
async fn create_asset_scopes_to_the_query_book() {
    let mut ports = TestPorts::new();
    ports
        .assets
        .expect_create_asset()
        .withf(|request| {
            request.book_id == 10
                && request.requester_id == 1
                && request.name == "Salary"
                && request.balance == 1_000_000
        })
        .return_once(|_| Ok(details(1_000_000, Some(2), Some("Bob"))));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/assets?bookId=10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .set_json(CreateAssetBody {
                name: "Salary".to_owned(),
                balance: 1_000_000,
                owner_member_id: Some(2),
            })
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/data/ownerNickname"), Some(&Value::from("Bob")));
}

#[actix_web::test]
async fn update_asset_forwards_the_asymmetric_patch() {
    let mut ports = TestPorts::new();
    ports
        .assets
        .expect_update_asset()
        .withf(|book_id, requester_id, asset_id, patch| {
            // Omitted name/balance arrive as None; the omitted owner is
            // None too, which the domain treats as "clear".
            *book_id == 10
                && *requester_id == 1
                && *asset_id == 7
                && patch.name.is_none()
                && patch.balance.is_none()
                && patch.owner_member_id.is_none()
        })
        .return_once(|_, _, _, _| Ok(details(500, None, None)));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/assets/7?bookId=10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .set_json(json!({}))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert!(body.pointer("/data/ownerMemberId").is_none());
    assert!(body.pointer("/data/ownerNickname").is_none());
}

#[actix_web::test]
async fn totals_route_wins_over_the_id_route() {
    let mut ports = TestPorts::new();
    ports
        .assets_query
        .expect_total_assets()
        .withf(|book_id, requester_id| *book_id == 10 && *requester_id == 1)
        .return_once(|_, _| {
            Ok(crate::domain::asset::AssetTotals {
                total_balance: 1_500_000,
                asset_count: 2,
            })
        });

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/assets/total?bookId=10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.pointer("/data/totalBalance"),
        Some(&Value::from(1_500_000))
    );
    assert_eq!(body.pointer("/data/assetCount"), Some(&Value::from(2)));
}

#[actix_web::test]
async fn list_assets_requires_the_book_scope() {
    let app = actix_test::init_service(app_with(TestPorts::new())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/assets")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;
    // Missing bookId fails query extraction.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_asset_surfaces_the_dependents_rule() {
    let mut ports = TestPorts::new();
    ports
        .assets
        .expect_delete_asset()
        .return_once(|_, _, _| Err(asset_has_dependents()));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/assets/7?bookId=10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        body.get("message"),
        Some(&Value::from("asset has dependent records"))
    );
}
