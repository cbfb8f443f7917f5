//! Driving ports for book lifecycle operations.

use async_trait::async_trait;

use crate::domain::book::Book;
use crate::domain::Error;

/// Book write operations; all are owner-only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCommand: Send + Sync {
    /// Rename a book. Blank names leave the stored name unchanged.
    async fn rename_book(&self, book_id: i64, requester_id: i64, name: String)
        -> Result<Book, Error>;

    /// Replace the invite code with a fresh one, guaranteed unique at the
    /// time of return.
    async fn regenerate_invite_code(&self, book_id: i64, requester_id: i64)
        -> Result<Book, Error>;

    /// Delete a book and all of its membership rows.
    async fn delete_book(&self, book_id: i64, requester_id: i64) -> Result<(), Error>;
}

/// Book read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookQuery: Send + Sync {
    /// Load the book the member owns.
    async fn my_book(&self, member_id: i64) -> Result<Book, Error>;
}
