//! Membership and invite workflow services.
//!
//! A `(member, book)` pair moves NonMember → Member (via invite join) and
//! back (leave or removal). The creator's Owner role never transitions; the
//! owner row only disappears with the whole book.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::book::InviteCode;
use crate::domain::failures::{
    already_joined_book, book_not_found, invalid_invite_code, member_not_found, not_book_member,
    not_book_owner, owner_cannot_leave, store_error,
};
use crate::domain::membership::BookMember;
use crate::domain::ports::{
    BookMemberRepository, BookRepository, MemberRepository, MembershipCommand, MembershipQuery,
};
use crate::domain::Error;

/// Unique constraint on the `(book_id, member_id)` pair.
const MEMBERSHIP_CONSTRAINT: &str = "uq_book_members_book_member";

/// Service implementing the membership driving ports.
#[derive(Clone)]
pub struct MembershipService<B, BM, M> {
    books: Arc<B>,
    memberships: Arc<BM>,
    members: Arc<M>,
}

impl<B, BM, M> MembershipService<B, BM, M> {
    /// Create a new service with its repositories.
    pub fn new(books: Arc<B>, memberships: Arc<BM>, members: Arc<M>) -> Self {
        Self {
            books,
            memberships,
            members,
        }
    }
}

#[async_trait]
impl<B, BM, M> MembershipCommand for MembershipService<B, BM, M>
where
    B: BookRepository,
    BM: BookMemberRepository,
    M: MemberRepository,
{
    async fn join_book(
        &self,
        member_id: i64,
        invite_code: InviteCode,
    ) -> Result<BookMember, Error> {
        self.members
            .find_by_id(member_id)
            .await
            .map_err(|e| store_error("member repository", e))?
            .ok_or_else(member_not_found)?;

        let book = self
            .books
            .find_by_invite_code(&invite_code)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(invalid_invite_code)?;

        let joined = self
            .memberships
            .exists(book.id, member_id)
            .await
            .map_err(|e| store_error("book member repository", e))?;
        if joined {
            return Err(already_joined_book());
        }

        match self.memberships.insert_member(book.id, member_id).await {
            Ok(membership) => {
                info!(book_id = book.id, member_id, "member joined book");
                Ok(membership)
            }
            // A concurrent join with the same code loses to the constraint.
            Err(e) if e.violates(MEMBERSHIP_CONSTRAINT) => Err(already_joined_book()),
            Err(e) => Err(store_error("book member repository", e)),
        }
    }

    async fn leave_or_remove(
        &self,
        book_id: i64,
        requester_id: i64,
        target_member_id: i64,
    ) -> Result<(), Error> {
        self.books
            .find_by_id(book_id)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(book_not_found)?;

        let requester = self
            .memberships
            .find(book_id, requester_id)
            .await
            .map_err(|e| store_error("book member repository", e))?
            .ok_or_else(not_book_member)?;

        let target = self
            .memberships
            .find(book_id, target_member_id)
            .await
            .map_err(|e| store_error("book member repository", e))?
            .ok_or_else(not_book_member)?;

        if requester_id == target_member_id {
            // Self-leave: any member may go, except the owner.
            if target.is_owner() {
                return Err(owner_cannot_leave());
            }
        } else {
            // Removal: only the owner removes others, and never the owner.
            if !requester.is_owner() {
                return Err(not_book_owner());
            }
            if target.is_owner() {
                return Err(owner_cannot_leave());
            }
        }

        self.memberships
            .delete(target.id)
            .await
            .map_err(|e| store_error("book member repository", e))?;
        info!(book_id, member_id = target_member_id, "membership removed");
        Ok(())
    }
}

#[async_trait]
impl<B, BM, M> MembershipQuery for MembershipService<B, BM, M>
where
    B: BookRepository,
    BM: BookMemberRepository,
    M: MemberRepository,
{
    async fn list_members(
        &self,
        book_id: i64,
        requester_id: i64,
    ) -> Result<Vec<BookMember>, Error> {
        let is_member = self
            .memberships
            .exists(book_id, requester_id)
            .await
            .map_err(|e| store_error("book member repository", e))?;
        if !is_member {
            return Err(not_book_member());
        }

        self.memberships
            .list_by_book(book_id)
            .await
            .map_err(|e| store_error("book member repository", e))
    }
}

#[cfg(test)]
#[path = "membership_service_tests.rs"]
mod tests;
