//! Tests for the membership service.

use std::sync::Arc;

use super::*;
use crate::domain::membership::BookRole;
use crate::domain::ports::{
    MockBookMemberRepository, MockBookRepository, MockMemberRepository, RepositoryError,
};
use crate::domain::test_fixtures::{book, book_member, invite_code, member};
use crate::domain::ErrorCode;

const BOOK: i64 = 10;
const OWNER: i64 = 1;
const MEMBER: i64 = 2;
const OTHER: i64 = 3;

fn known_members() -> MockMemberRepository {
    let mut members = MockMemberRepository::new();
    members
        .expect_find_by_id()
        .returning(|id| Ok(Some(member(id, "someone"))));
    members
}

fn books_resolving_code() -> MockBookRepository {
    let mut books = MockBookRepository::new();
    books
        .expect_find_by_invite_code()
        .returning(|_| Ok(Some(book(BOOK, OWNER, "AB12CD"))));
    books
}

fn books_with_book() -> MockBookRepository {
    let mut books = MockBookRepository::new();
    books
        .expect_find_by_id()
        .returning(|id| Ok(Some(book(id, OWNER, "AB12CD"))));
    books
}

fn service(
    books: MockBookRepository,
    memberships: MockBookMemberRepository,
    members: MockMemberRepository,
) -> MembershipService<MockBookRepository, MockBookMemberRepository, MockMemberRepository> {
    MembershipService::new(Arc::new(books), Arc::new(memberships), Arc::new(members))
}

/// Membership lookup table keyed by member id.
fn roster(entries: Vec<(i64, BookRole)>) -> MockBookMemberRepository {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_find().returning(move |book_id, member_id| {
        Ok(entries
            .iter()
            .find(|(id, _)| *id == member_id)
            .map(|(id, role)| book_member(100 + id, book_id, *id, *role)))
    });
    memberships
}

#[tokio::test]
async fn join_creates_a_member_role_row() {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_exists().return_once(|_, _| Ok(false));
    memberships
        .expect_insert_member()
        .times(1)
        .withf(|book_id, member_id| *book_id == BOOK && *member_id == MEMBER)
        .return_once(|book_id, member_id| {
            Ok(book_member(50, book_id, member_id, BookRole::Member))
        });

    let service = service(books_resolving_code(), memberships, known_members());
    let joined = service
        .join_book(MEMBER, invite_code("AB12CD"))
        .await
        .expect("join succeeds");

    assert_eq!(joined.member_id, MEMBER);
    assert_eq!(joined.role, BookRole::Member);
}

#[tokio::test]
async fn join_with_unknown_member_fails() {
    let mut members = MockMemberRepository::new();
    members.expect_find_by_id().return_once(|_| Ok(None));

    let service = service(
        MockBookRepository::new(),
        MockBookMemberRepository::new(),
        members,
    );
    let error = service
        .join_book(99, invite_code("AB12CD"))
        .await
        .expect_err("unknown member");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn join_with_unresolvable_code_fails() {
    let mut books = MockBookRepository::new();
    books.expect_find_by_invite_code().return_once(|_| Ok(None));

    let service = service(books, MockBookMemberRepository::new(), known_members());
    let error = service
        .join_book(MEMBER, invite_code("ZZ99ZZ"))
        .await
        .expect_err("bad code");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn second_join_with_the_same_code_is_rejected() {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_exists().return_once(|_, _| Ok(true));
    memberships.expect_insert_member().times(0);

    let service = service(books_resolving_code(), memberships, known_members());
    let error = service
        .join_book(MEMBER, invite_code("AB12CD"))
        .await
        .expect_err("already joined");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn racing_join_loses_to_the_membership_constraint() {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_exists().return_once(|_, _| Ok(false));
    memberships
        .expect_insert_member()
        .return_once(|_, _| {
            Err(RepositoryError::unique_violation(
                "uq_book_members_book_member",
            ))
        });

    let service = service(books_resolving_code(), memberships, known_members());
    let error = service
        .join_book(MEMBER, invite_code("AB12CD"))
        .await
        .expect_err("raced join");
    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn list_members_requires_membership() {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_exists().return_once(|_, _| Ok(false));

    let service = service(MockBookRepository::new(), memberships, known_members());
    let error = service
        .list_members(BOOK, 99)
        .await
        .expect_err("not a member");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn list_members_returns_the_whole_roster() {
    let mut memberships = MockBookMemberRepository::new();
    memberships.expect_exists().return_once(|_, _| Ok(true));
    memberships.expect_list_by_book().return_once(|book_id| {
        Ok(vec![
            book_member(1, book_id, OWNER, BookRole::Owner),
            book_member(2, book_id, MEMBER, BookRole::Member),
        ])
    });

    let service = service(MockBookRepository::new(), memberships, known_members());
    let members = service
        .list_members(BOOK, OWNER)
        .await
        .expect("list succeeds");
    assert_eq!(members.len(), 2);
}

#[tokio::test]
async fn self_leave_deletes_the_membership_row() {
    let mut memberships = roster(vec![(MEMBER, BookRole::Member)]);
    memberships
        .expect_delete()
        .times(1)
        .withf(|id| *id == 100 + MEMBER)
        .return_once(|_| Ok(()));

    let service = service(books_with_book(), memberships, known_members());
    service
        .leave_or_remove(BOOK, MEMBER, MEMBER)
        .await
        .expect("self-leave succeeds");
}

#[tokio::test]
async fn the_owner_cannot_leave() {
    let service = service(
        books_with_book(),
        roster(vec![(OWNER, BookRole::Owner)]),
        known_members(),
    );
    let error = service
        .leave_or_remove(BOOK, OWNER, OWNER)
        .await
        .expect_err("owner leave refused");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn the_owner_removes_a_member() {
    let mut memberships = roster(vec![(OWNER, BookRole::Owner), (MEMBER, BookRole::Member)]);
    memberships
        .expect_delete()
        .times(1)
        .withf(|id| *id == 100 + MEMBER)
        .return_once(|_| Ok(()));

    let service = service(books_with_book(), memberships, known_members());
    service
        .leave_or_remove(BOOK, OWNER, MEMBER)
        .await
        .expect("removal succeeds");
}

#[tokio::test]
async fn a_member_cannot_remove_anyone() {
    let service = service(
        books_with_book(),
        roster(vec![(MEMBER, BookRole::Member), (OTHER, BookRole::Member)]),
        known_members(),
    );
    let error = service
        .leave_or_remove(BOOK, MEMBER, OTHER)
        .await
        .expect_err("requester lacks the owner role");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn a_member_cannot_remove_the_owner() {
    let service = service(
        books_with_book(),
        roster(vec![(MEMBER, BookRole::Member), (OWNER, BookRole::Owner)]),
        known_members(),
    );
    let error = service
        .leave_or_remove(BOOK, MEMBER, OWNER)
        .await
        .expect_err("bob is not the owner");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}

#[tokio::test]
async fn nobody_removes_the_owner_row() {
    // Even a second hypothetical owner-role requester cannot delete the
    // owner's row; only whole-book deletion does.
    let service = service(
        books_with_book(),
        roster(vec![(OWNER, BookRole::Owner), (OTHER, BookRole::Owner)]),
        known_members(),
    );
    let error = service
        .leave_or_remove(BOOK, OTHER, OWNER)
        .await
        .expect_err("owner removal refused");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn leave_requires_the_book_to_exist() {
    let mut books = MockBookRepository::new();
    books.expect_find_by_id().return_once(|_| Ok(None));

    let service = service(books, MockBookMemberRepository::new(), known_members());
    let error = service
        .leave_or_remove(BOOK, MEMBER, MEMBER)
        .await
        .expect_err("book absent");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn leave_requires_existing_membership_rows() {
    let service = service(
        books_with_book(),
        roster(vec![(OWNER, BookRole::Owner)]),
        known_members(),
    );
    let error = service
        .leave_or_remove(BOOK, OWNER, 99)
        .await
        .expect_err("target has no row");
    assert_eq!(error.code(), ErrorCode::Forbidden);
}
