//! Tests for the book and membership handlers.

use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web, App};
use serde_json::Value;

use super::*;
use crate::domain::failures::not_book_owner;
use crate::domain::membership::BookRole;
use crate::domain::test_fixtures::{book, book_member};
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
    App::new()
        .app_data(web::Data::new(ports.into_state()))
        .service(get_my_book)
        .service(update_book)
        .service(regenerate_invite_code)
        .service(delete_book)
        .service(join_book)
        .service(list_book_members)
        .service(remove_book_member)
}

#[actix_web::test]
async fn my_book_requires_the_identity_header() {
    let app = actix_test::init_service(app_with(TestPorts::new())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/books/my").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn my_book_returns_the_owned_book() {
    let mut ports = TestPorts::new();
    ports
        .books_query
        .expect_my_book()
        .withf(|member_id| *member_id == 1)
        .return_once(|_| Ok(book(10, 1, "AB12CD")));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/books/my")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/data/inviteCode"), Some(&Value::from("AB12CD")));
    assert_eq!(body.pointer("/data/ownerId"), Some(&Value::from(1)));
}

#[actix_web::test]
async fn update_book_rejects_blank_names() {
    let app = actix_test::init_service(app_with(TestPorts::new())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/books/10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .set_json(UpdateBookBody {
                name: "   ".to_owned(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn update_book_maps_ownership_failures_to_forbidden() {
    let mut ports = TestPorts::new();
    ports
        .books
        .expect_rename_book()
        .return_once(|_, _, _| Err(not_book_owner()));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/books/10")
            .insert_header((MEMBER_ID_HEADER, "2"))
            .set_json(UpdateBookBody {
                name: "Household".to_owned(),
            })
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("status"), Some(&Value::from(403)));
}

#[actix_web::test]
async fn join_book_returns_the_new_membership() {
    let mut ports = TestPorts::new();
    ports
        .memberships
        .expect_join_book()
        .withf(|member_id, code| *member_id == 2 && code.as_str() == "AB12CD")
        .return_once(|member_id, _| Ok(book_member(50, 10, member_id, BookRole::Member)));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/books/join")
            .insert_header((MEMBER_ID_HEADER, "2"))
            .set_json(JoinBookBody {
                invite_code: "AB12CD".to_owned(),
            })
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.pointer("/data/role"), Some(&Value::from("MEMBER")));
    assert_eq!(body.pointer("/data/memberId"), Some(&Value::from(2)));
}

#[actix_web::test]
async fn join_book_rejects_malformed_codes_before_the_service() {
    // No expectation on the membership port: the format check fails first.
    let app = actix_test::init_service(app_with(TestPorts::new())).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/books/join")
            .insert_header((MEMBER_ID_HEADER, "2"))
            .set_json(JoinBookBody {
                invite_code: "ab12cd".to_owned(),
            })
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn list_members_wraps_the_roster() {
    let mut ports = TestPorts::new();
    ports
        .memberships_query
        .expect_list_members()
        .return_once(|book_id, _| {
            Ok(vec![
                book_member(1, book_id, 1, BookRole::Owner),
                book_member(2, book_id, 2, BookRole::Member),
            ])
        });

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/books/10/members")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let roster = body.pointer("/data").and_then(Value::as_array).expect("array");
    assert_eq!(roster.len(), 2);
    assert_eq!(roster[0].get("role"), Some(&Value::from("OWNER")));
}

#[actix_web::test]
async fn remove_member_routes_requester_and_target() {
    let mut ports = TestPorts::new();
    ports
        .memberships
        .expect_leave_or_remove()
        .withf(|book_id, requester_id, target_id| {
            *book_id == 10 && *requester_id == 1 && *target_id == 2
        })
        .return_once(|_, _, _| Ok(()));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/books/10/members/2")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body.get("status"), Some(&Value::from(200)));
    assert!(body.get("data").is_none());
}

#[actix_web::test]
async fn delete_book_returns_an_empty_envelope() {
    let mut ports = TestPorts::new();
    ports.books.expect_delete_book().return_once(|_, _| Ok(()));

    let app = actix_test::init_service(app_with(ports)).await;
    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri("/api/books/10")
            .insert_header((MEMBER_ID_HEADER, "1"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}
