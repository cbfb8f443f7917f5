//! PostgreSQL-backed `BookRepository` using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::book::{Book, InviteCode};
use crate::domain::ports::{BookRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::BookRow;
use super::pool::DbPool;
use super::schema::{book_members, books};

/// Diesel-backed implementation of the book repository port.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn find_by_id(&self, book_id: i64) -> Result<Option<Book>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = books::table
            .find(book_id)
            .select(BookRow::as_select())
            .first::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookRow::try_into_domain).transpose()
    }

    async fn find_by_invite_code(
        &self,
        invite_code: &InviteCode,
    ) -> Result<Option<Book>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = books::table
            .filter(books::invite_code.eq(invite_code.as_str()))
            .select(BookRow::as_select())
            .first::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookRow::try_into_domain).transpose()
    }

    async fn invite_code_exists(
        &self,
        invite_code: &InviteCode,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            books::table.filter(books::invite_code.eq(invite_code.as_str())),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn update_name(
        &self,
        book_id: i64,
        name: &str,
    ) -> Result<Option<Book>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(books::table.find(book_id))
            .set((books::name.eq(name), books::updated_at.eq(Utc::now())))
            .returning(BookRow::as_returning())
            .get_result::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookRow::try_into_domain).transpose()
    }

    async fn update_invite_code(
        &self,
        book_id: i64,
        invite_code: &InviteCode,
    ) -> Result<Option<Book>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(books::table.find(book_id))
            .set((
                books::invite_code.eq(invite_code.as_str()),
                books::updated_at.eq(Utc::now()),
            ))
            .returning(BookRow::as_returning())
            .get_result::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookRow::try_into_domain).transpose()
    }

    async fn delete_with_members(&self, book_id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Membership rows first so none are left dangling.
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            async move {
                diesel::delete(book_members::table.filter(book_members::book_id.eq(book_id)))
                    .execute(conn)
                    .await?;
                diesel::delete(books::table.find(book_id))
                    .execute(conn)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
