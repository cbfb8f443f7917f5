//! Driving ports for asset CRUD inside a book.

use async_trait::async_trait;

use crate::domain::asset::{AssetDetails, AssetPatch, AssetTotals};
use crate::domain::Error;

/// Payload for creating an asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateAssetRequest {
    pub book_id: i64,
    pub requester_id: i64,
    pub name: String,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
}

/// Asset write operations; all require book membership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetCommand: Send + Sync {
    /// Create an asset in a book.
    async fn create_asset(&self, request: CreateAssetRequest) -> Result<AssetDetails, Error>;

    /// Apply a partial update with the asymmetric field semantics of
    /// [`AssetPatch`].
    async fn update_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
        patch: AssetPatch,
    ) -> Result<AssetDetails, Error>;

    /// Delete an asset unless dependent records reference it.
    async fn delete_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
    ) -> Result<(), Error>;
}

/// Asset read operations; all require book membership.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetQuery: Send + Sync {
    /// Load one asset of a book.
    async fn get_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
    ) -> Result<AssetDetails, Error>;

    /// All assets of a book.
    async fn list_assets(
        &self,
        book_id: i64,
        requester_id: i64,
    ) -> Result<Vec<AssetDetails>, Error>;

    /// Sum and count over the book's assets; zero for an empty book.
    async fn total_assets(&self, book_id: i64, requester_id: i64) -> Result<AssetTotals, Error>;
}
