//! Port for book membership persistence.

use async_trait::async_trait;

use crate::domain::membership::{BookMember, BookRole};

use super::RepositoryError;

/// Port for reading and writing membership rows.
///
/// OWNER rows are only ever created inside the registration unit
/// (`MemberRepository::create_with_owned_book`); this port inserts MEMBER
/// rows for invite joins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookMemberRepository: Send + Sync {
    /// Find the membership row for a `(book, member)` pair.
    async fn find(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> Result<Option<BookMember>, RepositoryError>;

    /// Whether a membership row exists for a `(book, member)` pair.
    async fn exists(&self, book_id: i64, member_id: i64) -> Result<bool, RepositoryError>;

    /// Find the membership row a member holds with the given role, if any.
    ///
    /// Used with [`BookRole::Owner`] to resolve "my book".
    async fn find_by_member_and_role(
        &self,
        member_id: i64,
        role: BookRole,
    ) -> Result<Option<BookMember>, RepositoryError>;

    /// All membership rows of a book; order carries no meaning.
    async fn list_by_book(&self, book_id: i64) -> Result<Vec<BookMember>, RepositoryError>;

    /// Insert a MEMBER-role row for an invite join.
    async fn insert_member(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> Result<BookMember, RepositoryError>;

    /// Delete a membership row by id.
    async fn delete(&self, membership_id: i64) -> Result<(), RepositoryError>;
}
