//! PostgreSQL-backed `AssetRepository` using Diesel.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::asset::{Asset, AssetChanges};
use crate::domain::ports::{AssetRepository, NewAssetRecord, RepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{AssetChangeset, AssetRow, NewAssetRow};
use super::pool::DbPool;
use super::schema::assets;

/// Diesel-backed implementation of the asset repository port.
#[derive(Clone)]
pub struct DieselAssetRepository {
    pool: DbPool,
}

impl DieselAssetRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRepository for DieselAssetRepository {
    async fn insert(&self, record: &NewAssetRecord) -> Result<Asset, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: AssetRow = diesel::insert_into(assets::table)
            .values(NewAssetRow {
                book_id: record.book_id,
                name: &record.name,
                balance: record.balance,
                owner_member_id: record.owner_member_id,
            })
            .returning(AssetRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(row.into_domain())
    }

    async fn find_in_book(
        &self,
        asset_id: i64,
        book_id: i64,
    ) -> Result<Option<Asset>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = assets::table
            .filter(assets::id.eq(asset_id).and(assets::book_id.eq(book_id)))
            .select(AssetRow::as_select())
            .first::<AssetRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(AssetRow::into_domain))
    }

    async fn list_by_book(&self, book_id: i64) -> Result<Vec<Asset>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<AssetRow> = assets::table
            .filter(assets::book_id.eq(book_id))
            .select(AssetRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(AssetRow::into_domain).collect())
    }

    async fn update(
        &self,
        asset_id: i64,
        changes: &AssetChanges,
    ) -> Result<Option<Asset>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::update(assets::table.find(asset_id))
            .set(AssetChangeset {
                name: &changes.name,
                balance: changes.balance,
                owner_member_id: changes.owner_member_id,
                updated_at: Utc::now(),
            })
            .returning(AssetRow::as_returning())
            .get_result::<AssetRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(AssetRow::into_domain))
    }

    async fn delete(&self, asset_id: i64) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(assets::table.find(asset_id))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }
}
