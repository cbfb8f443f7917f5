//! Port for member persistence.

use async_trait::async_trait;

use crate::domain::book::{Book, InviteCode};
use crate::domain::member::Member;

use super::RepositoryError;

/// Field values for a new member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMemberRecord {
    pub email: String,
    pub nickname: String,
}

/// Partial profile update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfilePatch {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Port for reading and writing member records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Whether a member with this email already exists.
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError>;

    /// Persist a new member together with their auto-created book and the
    /// OWNER membership row, as one atomic unit.
    ///
    /// Registration must never leave a member without a book, so all three
    /// inserts share a transaction.
    async fn create_with_owned_book(
        &self,
        record: &NewMemberRecord,
        book_name: &str,
        invite_code: &InviteCode,
    ) -> Result<(Member, Book), RepositoryError>;

    /// Find a member by id.
    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, RepositoryError>;

    /// Apply a profile patch, returning the updated member or `None` when
    /// the id is unknown.
    async fn update_profile(
        &self,
        member_id: i64,
        patch: &ProfilePatch,
    ) -> Result<Option<Member>, RepositoryError>;
}
