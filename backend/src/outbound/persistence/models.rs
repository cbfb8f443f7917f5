//! Internal Diesel row structs and their domain conversions.
//!
//! Implementation details of the persistence layer: row types satisfy
//! Diesel's query and mutation requirements, and the conversion helpers
//! rebuild validated domain values from stored columns.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::domain::asset::Asset;
use crate::domain::book::{Book, InviteCode};
use crate::domain::member::Member;
use crate::domain::membership::{BookMember, BookRole};
use crate::domain::ports::RepositoryError;
use crate::domain::timestamps::Timestamps;

use super::schema::{assets, book_members, books, members};

// ---------------------------------------------------------------------------
// Member models
// ---------------------------------------------------------------------------

/// Row struct for reading from the members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MemberRow {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MemberRow {
    pub(crate) fn into_domain(self) -> Member {
        Member {
            id: self.id,
            email: self.email,
            nickname: self.nickname,
            profile_image_url: self.profile_image_url,
            timestamps: Timestamps::new(self.created_at, self.updated_at),
        }
    }
}

/// Insertable struct for creating member records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = members)]
pub(crate) struct NewMemberRow<'a> {
    pub email: &'a str,
    pub nickname: &'a str,
}

/// Changeset for partial profile updates; `None` fields are skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = members)]
pub(crate) struct MemberProfileChangeset<'a> {
    pub nickname: Option<&'a str>,
    pub profile_image_url: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Book models
// ---------------------------------------------------------------------------

/// Row struct for reading from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i64,
    pub name: String,
    pub invite_code: String,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookRow {
    pub(crate) fn try_into_domain(self) -> Result<Book, RepositoryError> {
        let invite_code = InviteCode::parse(self.invite_code)
            .map_err(|err| RepositoryError::query(format!("stored invite code invalid: {err}")))?;
        Ok(Book {
            id: self.id,
            name: self.name,
            invite_code,
            owner_id: self.owner_id,
            timestamps: Timestamps::new(self.created_at, self.updated_at),
        })
    }
}

/// Insertable struct for creating book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub name: &'a str,
    pub invite_code: &'a str,
    pub owner_id: i64,
}

// ---------------------------------------------------------------------------
// Book member models
// ---------------------------------------------------------------------------

/// Row struct for reading from the book_members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = book_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookMemberRow {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

impl BookMemberRow {
    pub(crate) fn try_into_domain(self) -> Result<BookMember, RepositoryError> {
        let role = BookRole::from_str(&self.role)
            .map_err(|err| RepositoryError::query(format!("stored role invalid: {err}")))?;
        Ok(BookMember {
            id: self.id,
            book_id: self.book_id,
            member_id: self.member_id,
            role,
            joined_at: self.joined_at,
        })
    }
}

/// Insertable struct for creating membership rows.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = book_members)]
pub(crate) struct NewBookMemberRow<'a> {
    pub book_id: i64,
    pub member_id: i64,
    pub role: &'a str,
}

// ---------------------------------------------------------------------------
// Asset models
// ---------------------------------------------------------------------------

/// Row struct for reading from the assets table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = assets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct AssetRow {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AssetRow {
    pub(crate) fn into_domain(self) -> Asset {
        Asset {
            id: self.id,
            book_id: self.book_id,
            name: self.name,
            balance: self.balance,
            owner_member_id: self.owner_member_id,
            timestamps: Timestamps::new(self.created_at, self.updated_at),
        }
    }
}

/// Insertable struct for creating asset records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = assets)]
pub(crate) struct NewAssetRow<'a> {
    pub book_id: i64,
    pub name: &'a str,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
}

/// Changeset applying the final values of an asset update.
///
/// `treat_none_as_null` makes a `None` owner clear the column instead of
/// skipping it, which carries the asymmetric patch semantics to the store.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = assets)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct AssetChangeset<'a> {
    pub name: &'a str,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
    pub updated_at: DateTime<Utc>,
}
