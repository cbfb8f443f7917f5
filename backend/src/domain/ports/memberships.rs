//! Driving ports for the membership and invite workflow.

use async_trait::async_trait;

use crate::domain::book::InviteCode;
use crate::domain::membership::BookMember;
use crate::domain::Error;

/// Membership write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipCommand: Send + Sync {
    /// Join the book behind an invite code as a MEMBER.
    async fn join_book(
        &self,
        member_id: i64,
        invite_code: InviteCode,
    ) -> Result<BookMember, Error>;

    /// Leave a book, or — when requester and target differ — remove another
    /// member as the owner. The owner's own row can never be removed.
    async fn leave_or_remove(
        &self,
        book_id: i64,
        requester_id: i64,
        target_member_id: i64,
    ) -> Result<(), Error>;
}

/// Membership read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipQuery: Send + Sync {
    /// All membership rows of a book, visible to any of its members.
    async fn list_members(&self, book_id: i64, requester_id: i64)
        -> Result<Vec<BookMember>, Error>;
}
