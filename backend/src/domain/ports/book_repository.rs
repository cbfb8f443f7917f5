//! Port for book persistence.

use async_trait::async_trait;

use crate::domain::book::{Book, InviteCode};

use super::RepositoryError;

/// Port for reading and writing book records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by id.
    async fn find_by_id(&self, book_id: i64) -> Result<Option<Book>, RepositoryError>;

    /// Resolve an invite code to its book.
    async fn find_by_invite_code(
        &self,
        invite_code: &InviteCode,
    ) -> Result<Option<Book>, RepositoryError>;

    /// Whether any book already holds this invite code.
    async fn invite_code_exists(&self, invite_code: &InviteCode) -> Result<bool, RepositoryError>;

    /// Rename a book, returning the updated record or `None` when the id is
    /// unknown.
    async fn update_name(&self, book_id: i64, name: &str) -> Result<Option<Book>, RepositoryError>;

    /// Store a freshly generated invite code, returning the updated record
    /// or `None` when the id is unknown.
    async fn update_invite_code(
        &self,
        book_id: i64,
        invite_code: &InviteCode,
    ) -> Result<Option<Book>, RepositoryError>;

    /// Delete a book and all of its membership rows in one transaction,
    /// membership rows first so none are left dangling.
    async fn delete_with_members(&self, book_id: i64) -> Result<(), RepositoryError>;
}
