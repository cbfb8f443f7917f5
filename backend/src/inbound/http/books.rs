//! Book and membership HTTP handlers.
//!
//! ```text
//! GET    /api/books/my
//! PUT    /api/books/{id}
//! POST   /api/books/{id}/invite-code
//! DELETE /api/books/{id}
//! POST   /api/books/join
//! GET    /api/books/{id}/members
//! DELETE /api/books/{id}/members/{memberId}
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::book::{Book, InviteCode};
use crate::domain::membership::BookMember;
use crate::domain::Error;
use crate::inbound::http::envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::identity::MemberIdentity;
use crate::inbound::http::state::HttpState;

/// Request payload for renaming a book.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookBody {
    #[schema(example = "Household ledger")]
    pub name: String,
}

/// Request payload for joining a book by invite code.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinBookBody {
    #[schema(example = "AB12CD")]
    pub invite_code: String,
}

/// Book payload returned by the book endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookBody {
    pub id: i64,
    pub name: String,
    #[schema(example = "AB12CD")]
    pub invite_code: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Book> for BookBody {
    fn from(value: Book) -> Self {
        Self {
            id: value.id,
            name: value.name,
            invite_code: value.invite_code.as_str().to_owned(),
            owner_id: value.owner_id,
            created_at: value.timestamps.created_at,
            updated_at: value.timestamps.updated_at,
        }
    }
}

/// Membership payload returned by the membership endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookMemberBody {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    #[schema(example = "MEMBER")]
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl From<BookMember> for BookMemberBody {
    fn from(value: BookMember) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            member_id: value.member_id,
            role: value.role.as_str().to_owned(),
            joined_at: value.joined_at,
        }
    }
}

/// Load the caller's own book.
#[utoipa::path(
    get,
    path = "/api/books/my",
    responses(
        (status = 200, description = "Book found", body = BookBody),
        (status = 401, description = "Missing caller identity"),
        (status = 404, description = "No owned book")
    ),
    tags = ["books"],
    operation_id = "getMyBook",
    security(("MemberIdHeader" = []))
)]
#[get("/api/books/my")]
pub async fn get_my_book(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
) -> ApiResult<HttpResponse> {
    let book = state.books_query.my_book(identity.id()).await?;
    Ok(envelope::ok(BookBody::from(book)))
}

/// Rename a book (owner only).
#[utoipa::path(
    put,
    path = "/api/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    request_body = UpdateBookBody,
    responses(
        (status = 200, description = "Book renamed", body = BookBody),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    ),
    tags = ["books"],
    operation_id = "updateBook",
    security(("MemberIdHeader" = []))
)]
#[put("/api/books/{id}")]
pub async fn update_book(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<i64>,
    payload: web::Json<UpdateBookBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    if body.name.trim().is_empty() {
        return Err(Error::invalid_request("book name must not be blank")
            .with_details(json!({ "field": "name", "code": "blank_book_name" }))
            .into());
    }
    let book = state
        .books
        .rename_book(path.into_inner(), identity.id(), body.name)
        .await?;
    Ok(envelope::ok(BookBody::from(book)))
}

/// Replace the invite code with a fresh unique one (owner only).
#[utoipa::path(
    post,
    path = "/api/books/{id}/invite-code",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Invite code regenerated", body = BookBody),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    ),
    tags = ["books"],
    operation_id = "regenerateInviteCode",
    security(("MemberIdHeader" = []))
)]
#[post("/api/books/{id}/invite-code")]
pub async fn regenerate_invite_code(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let book = state
        .books
        .regenerate_invite_code(path.into_inner(), identity.id())
        .await?;
    Ok(envelope::ok(BookBody::from(book)))
}

/// Delete a book and all of its memberships (owner only).
#[utoipa::path(
    delete,
    path = "/api/books/{id}",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Book not found")
    ),
    tags = ["books"],
    operation_id = "deleteBook",
    security(("MemberIdHeader" = []))
)]
#[delete("/api/books/{id}")]
pub async fn delete_book(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .books
        .delete_book(path.into_inner(), identity.id())
        .await?;
    Ok(envelope::ok_empty())
}

/// Join the book behind an invite code.
#[utoipa::path(
    post,
    path = "/api/books/join",
    request_body = JoinBookBody,
    responses(
        (status = 201, description = "Joined the book", body = BookMemberBody),
        (status = 400, description = "Invalid invite code"),
        (status = 409, description = "Already joined")
    ),
    tags = ["books"],
    operation_id = "joinBook",
    security(("MemberIdHeader" = []))
)]
#[post("/api/books/join")]
pub async fn join_book(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    payload: web::Json<JoinBookBody>,
) -> ApiResult<HttpResponse> {
    let invite_code = InviteCode::parse(payload.into_inner().invite_code)?;
    let membership = state
        .memberships
        .join_book(identity.id(), invite_code)
        .await?;
    Ok(envelope::created(BookMemberBody::from(membership)))
}

/// List all members of a book (members only).
#[utoipa::path(
    get,
    path = "/api/books/{id}/members",
    params(("id" = i64, Path, description = "Book id")),
    responses(
        (status = 200, description = "Membership roster", body = [BookMemberBody]),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Book not found")
    ),
    tags = ["books"],
    operation_id = "listBookMembers",
    security(("MemberIdHeader" = []))
)]
#[get("/api/books/{id}/members")]
pub async fn list_book_members(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let members = state
        .memberships_query
        .list_members(path.into_inner(), identity.id())
        .await?;
    let bodies: Vec<BookMemberBody> = members.into_iter().map(BookMemberBody::from).collect();
    Ok(envelope::ok(bodies))
}

/// Leave a book, or remove another member as the owner.
#[utoipa::path(
    delete,
    path = "/api/books/{id}/members/{memberId}",
    params(
        ("id" = i64, Path, description = "Book id"),
        ("memberId" = i64, Path, description = "Member to remove")
    ),
    responses(
        (status = 200, description = "Membership removed"),
        (status = 400, description = "Owner cannot leave"),
        (status = 403, description = "Not permitted"),
        (status = 404, description = "Book or membership not found")
    ),
    tags = ["books"],
    operation_id = "leaveOrRemoveMember",
    security(("MemberIdHeader" = []))
)]
#[delete("/api/books/{id}/members/{memberId}")]
pub async fn remove_book_member(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    path: web::Path<(i64, i64)>,
) -> ApiResult<HttpResponse> {
    let (book_id, target_member_id) = path.into_inner();
    state
        .memberships
        .leave_or_remove(book_id, identity.id(), target_member_id)
        .await?;
    Ok(envelope::ok_empty())
}

#[cfg(test)]
#[path = "books_tests.rs"]
mod tests;
