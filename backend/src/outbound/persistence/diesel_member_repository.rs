//! PostgreSQL-backed `MemberRepository` using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::book::{Book, InviteCode};
use crate::domain::member::Member;
use crate::domain::membership::BookRole;
use crate::domain::ports::{MemberRepository, NewMemberRecord, ProfilePatch, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    BookRow, MemberProfileChangeset, MemberRow, NewBookMemberRow, NewBookRow, NewMemberRow,
};
use super::pool::DbPool;
use super::schema::{book_members, books, members};

/// Diesel-backed implementation of the member repository port.
#[derive(Clone)]
pub struct DieselMemberRepository {
    pool: DbPool,
}

impl DieselMemberRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberRepository for DieselMemberRepository {
    async fn email_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::select(diesel::dsl::exists(
            members::table.filter(members::email.eq(email)),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn create_with_owned_book(
        &self,
        record: &NewMemberRecord,
        book_name: &str,
        invite_code: &InviteCode,
    ) -> Result<(Member, Book), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        // Registration is one unit: a member must never exist without
        // their book and OWNER row.
        let (member_row, book_row) = conn
            .transaction::<(MemberRow, BookRow), diesel::result::Error, _>(|conn| {
                async move {
                    let member_row: MemberRow = diesel::insert_into(members::table)
                        .values(NewMemberRow {
                            email: &record.email,
                            nickname: &record.nickname,
                        })
                        .returning(MemberRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let book_row: BookRow = diesel::insert_into(books::table)
                        .values(NewBookRow {
                            name: book_name,
                            invite_code: invite_code.as_str(),
                            owner_id: member_row.id,
                        })
                        .returning(BookRow::as_returning())
                        .get_result(conn)
                        .await?;

                    diesel::insert_into(book_members::table)
                        .values(NewBookMemberRow {
                            book_id: book_row.id,
                            member_id: member_row.id,
                            role: BookRole::Owner.as_str(),
                        })
                        .execute(conn)
                        .await?;

                    Ok((member_row, book_row))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok((member_row.into_domain(), book_row.try_into_domain()?))
    }

    async fn find_by_id(&self, member_id: i64) -> Result<Option<Member>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = members::table
            .find(member_id)
            .select(MemberRow::as_select())
            .first::<MemberRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(MemberRow::into_domain))
    }

    async fn update_profile(
        &self,
        member_id: i64,
        patch: &ProfilePatch,
    ) -> Result<Option<Member>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(members::table.find(member_id))
            .set(MemberProfileChangeset {
                nickname: patch.nickname.as_deref(),
                profile_image_url: patch.profile_image_url.as_deref(),
                updated_at: Utc::now(),
            })
            .returning(MemberRow::as_returning())
            .get_result::<MemberRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(MemberRow::into_domain))
    }
}
