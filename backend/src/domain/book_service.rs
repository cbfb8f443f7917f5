//! Book lifecycle services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::book::{validate_name, Book};
use crate::domain::failures::{
    book_not_found, not_book_member, not_book_owner, store_error,
};
use crate::domain::membership::BookRole;
use crate::domain::ports::{
    BookCommand, BookMemberRepository, BookQuery, BookRepository, InviteCodeSource,
};
use crate::domain::Error;

/// Service implementing the book driving ports.
#[derive(Clone)]
pub struct BookService<B, M, G> {
    books: Arc<B>,
    memberships: Arc<M>,
    invite_codes: Arc<G>,
}

impl<B, M, G> BookService<B, M, G> {
    /// Create a new service with its repositories and code source.
    pub fn new(books: Arc<B>, memberships: Arc<M>, invite_codes: Arc<G>) -> Self {
        Self {
            books,
            memberships,
            invite_codes,
        }
    }
}

impl<B, M, G> BookService<B, M, G>
where
    B: BookRepository,
    M: BookMemberRepository,
    G: InviteCodeSource,
{
    /// Owner gate shared by every privileged book operation: the book must
    /// exist, the requester must hold a membership row, and that row must
    /// carry the owner role.
    async fn require_owner(&self, book_id: i64, requester_id: i64) -> Result<Book, Error> {
        let book = self
            .books
            .find_by_id(book_id)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(book_not_found)?;

        let membership = self
            .memberships
            .find(book_id, requester_id)
            .await
            .map_err(|e| store_error("book member repository", e))?
            .ok_or_else(not_book_member)?;

        if !membership.is_owner() {
            return Err(not_book_owner());
        }
        Ok(book)
    }

    /// Draw candidate codes until one is unused.
    ///
    /// The code space (36^6) dwarfs the number of books, so the loop is
    /// treated as always terminating; the store constraint still backstops
    /// a concurrent writer claiming the same code.
    async fn draw_unused_code(&self) -> Result<crate::domain::book::InviteCode, Error> {
        loop {
            let candidate = self.invite_codes.generate();
            let taken = self
                .books
                .invite_code_exists(&candidate)
                .await
                .map_err(|e| store_error("book repository", e))?;
            if !taken {
                return Ok(candidate);
            }
            debug!("invite code collided during regeneration, drawing again");
        }
    }
}

#[async_trait]
impl<B, M, G> BookCommand for BookService<B, M, G>
where
    B: BookRepository,
    M: BookMemberRepository,
    G: InviteCodeSource,
{
    async fn rename_book(
        &self,
        book_id: i64,
        requester_id: i64,
        name: String,
    ) -> Result<Book, Error> {
        let book = self.require_owner(book_id, requester_id).await?;

        // Blank names leave the stored name untouched.
        if name.trim().is_empty() {
            return Ok(book);
        }
        validate_name(&name)?;

        self.books
            .update_name(book_id, &name)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(book_not_found)
    }

    async fn regenerate_invite_code(
        &self,
        book_id: i64,
        requester_id: i64,
    ) -> Result<Book, Error> {
        self.require_owner(book_id, requester_id).await?;

        let code = self.draw_unused_code().await?;
        self.books
            .update_invite_code(book_id, &code)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(book_not_found)
    }

    async fn delete_book(&self, book_id: i64, requester_id: i64) -> Result<(), Error> {
        self.require_owner(book_id, requester_id).await?;

        self.books
            .delete_with_members(book_id)
            .await
            .map_err(|e| store_error("book repository", e))?;
        info!(book_id, "book deleted with its membership rows");
        Ok(())
    }
}

#[async_trait]
impl<B, M, G> BookQuery for BookService<B, M, G>
where
    B: BookRepository,
    M: BookMemberRepository,
    G: InviteCodeSource,
{
    async fn my_book(&self, member_id: i64) -> Result<Book, Error> {
        let membership = self
            .memberships
            .find_by_member_and_role(member_id, BookRole::Owner)
            .await
            .map_err(|e| store_error("book member repository", e))?
            .ok_or_else(book_not_found)?;

        // Missing book row despite an OWNER membership is a consistency
        // fault; surface it the same way as "no book".
        self.books
            .find_by_id(membership.book_id)
            .await
            .map_err(|e| store_error("book repository", e))?
            .ok_or_else(book_not_found)
    }
}

#[cfg(test)]
#[path = "book_service_tests.rs"]
mod tests;
