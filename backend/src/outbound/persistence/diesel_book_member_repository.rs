//! PostgreSQL-backed `BookMemberRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::membership::{BookMember, BookRole};
use crate::domain::ports::{BookMemberRepository, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{BookMemberRow, NewBookMemberRow};
use super::pool::DbPool;
use super::schema::book_members;

/// Diesel-backed implementation of the book member repository port.
#[derive(Clone)]
pub struct DieselBookMemberRepository {
    pool: DbPool,
}

impl DieselBookMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookMemberRepository for DieselBookMemberRepository {
    async fn find(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> Result<Option<BookMember>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = book_members::table
            .filter(
                book_members::book_id
                    .eq(book_id)
                    .and(book_members::member_id.eq(member_id)),
            )
            .select(BookMemberRow::as_select())
            .first::<BookMemberRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookMemberRow::try_into_domain).transpose()
    }

    async fn exists(&self, book_id: i64, member_id: i64) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            book_members::table.filter(
                book_members::book_id
                    .eq(book_id)
                    .and(book_members::member_id.eq(member_id)),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn find_by_member_and_role(
        &self,
        member_id: i64,
        role: BookRole,
    ) -> Result<Option<BookMember>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = book_members::table
            .filter(
                book_members::member_id
                    .eq(member_id)
                    .and(book_members::role.eq(role.as_str())),
            )
            .select(BookMemberRow::as_select())
            .first::<BookMemberRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(BookMemberRow::try_into_domain).transpose()
    }

    async fn list_by_book(&self, book_id: i64) -> Result<Vec<BookMember>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<BookMemberRow> = book_members::table
            .filter(book_members::book_id.eq(book_id))
            .select(BookMemberRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter()
            .map(BookMemberRow::try_into_domain)
            .collect()
    }

    async fn insert_member(
        &self,
        book_id: i64,
        member_id: i64,
    ) -> Result<BookMember, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: BookMemberRow = diesel::insert_into(book_members::table)
            .values(NewBookMemberRow {
                book_id,
                member_id,
                role: BookRole::Member.as_str(),
            })
            .returning(BookMemberRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row.try_into_domain()
    }

    async fn delete(&self, membership_id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(book_members::table.find(membership_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
