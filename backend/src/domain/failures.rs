//! Named domain failures shared by the services.
//!
//! Each rule violation maps to exactly one failure here, so every service
//! raises the same error for the same condition and the HTTP adapter sees a
//! single vocabulary.

use serde_json::json;
use tracing::debug;

use crate::domain::ports::RepositoryError;
use crate::domain::Error;

/// Registration attempted with an email that is already stored.
pub fn duplicate_email() -> Error {
    Error::conflict("email already registered").with_details(json!({ "code": "duplicate_email" }))
}

/// No member exists with the given id.
pub fn member_not_found() -> Error {
    Error::not_found("member not found").with_details(json!({ "code": "member_not_found" }))
}

/// No book exists with the given id, or the caller has no owned book.
pub fn book_not_found() -> Error {
    Error::not_found("book not found").with_details(json!({ "code": "book_not_found" }))
}

/// No asset with the given id exists under the given book.
pub fn asset_not_found() -> Error {
    Error::not_found("asset not found").with_details(json!({ "code": "asset_not_found" }))
}

/// The invite code resolves to no book.
pub fn invalid_invite_code() -> Error {
    Error::invalid_request("invalid invite code")
        .with_details(json!({ "code": "invalid_invite_code" }))
}

/// The caller already holds a membership row for this book.
pub fn already_joined_book() -> Error {
    Error::conflict("already joined this book")
        .with_details(json!({ "code": "already_joined_book" }))
}

/// The caller holds no membership row for this book.
pub fn not_book_member() -> Error {
    Error::forbidden("not a member of this book")
        .with_details(json!({ "code": "not_book_member" }))
}

/// The caller's membership row does not carry the owner role.
pub fn not_book_owner() -> Error {
    Error::forbidden("only the book owner can perform this action")
        .with_details(json!({ "code": "not_book_owner" }))
}

/// The owner's membership row can only disappear with the whole book.
pub fn owner_cannot_leave() -> Error {
    Error::invalid_request("the book owner cannot leave or be removed")
        .with_details(json!({ "code": "owner_cannot_leave" }))
}

/// Dependent records still reference the asset.
pub fn asset_has_dependents() -> Error {
    Error::invalid_request("asset has dependent records")
        .with_details(json!({ "code": "asset_has_dependents" }))
}

/// Map an unexpected repository failure into a domain error.
///
/// Unique violations the caller did not translate beforehand land here as
/// internal errors: they indicate a constraint the service failed to
/// anticipate.
pub fn store_error(context: &str, error: RepositoryError) -> Error {
    debug!(context, %error, "repository operation failed");
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("{context} unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("{context} error: {message}"))
        }
        RepositoryError::UniqueViolation { constraint } => {
            Error::internal(format!("{context} violated constraint {constraint}"))
        }
    }
}
