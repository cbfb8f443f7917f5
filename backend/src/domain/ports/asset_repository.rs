//! Port for asset persistence.

use async_trait::async_trait;

use crate::domain::asset::{Asset, AssetChanges};

use super::RepositoryError;

/// Field values for a new asset record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssetRecord {
    pub book_id: i64,
    pub name: String,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
}

/// Port for reading and writing asset records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Persist a new asset.
    async fn insert(&self, record: &NewAssetRecord) -> Result<Asset, RepositoryError>;

    /// Find an asset by id, scoped to its book: an id that exists under a
    /// different book resolves to `None`.
    async fn find_in_book(
        &self,
        asset_id: i64,
        book_id: i64,
    ) -> Result<Option<Asset>, RepositoryError>;

    /// All assets of a book.
    async fn list_by_book(&self, book_id: i64) -> Result<Vec<Asset>, RepositoryError>;

    /// Write the final field values computed by the service, returning the
    /// updated record or `None` when the id is unknown.
    async fn update(
        &self,
        asset_id: i64,
        changes: &AssetChanges,
    ) -> Result<Option<Asset>, RepositoryError>;

    /// Delete an asset by id.
    async fn delete(&self, asset_id: i64) -> Result<(), RepositoryError>;
}
