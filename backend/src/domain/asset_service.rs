//! Asset CRUD services.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::asset::{
    validate_name, Asset, AssetDetails, AssetPatch, AssetTotals,
};
use crate::domain::failures::{
    asset_has_dependents, asset_not_found, not_book_member, store_error,
};
use crate::domain::ports::{
    AssetCommand, AssetDependencyProbe, AssetQuery, AssetRepository, BookMemberRepository,
    CreateAssetRequest, MemberRepository, NewAssetRecord,
};
use crate::domain::Error;

/// Service implementing the asset driving ports.
#[derive(Clone)]
pub struct AssetService<A, BM, M, P> {
    assets: Arc<A>,
    memberships: Arc<BM>,
    members: Arc<M>,
    dependencies: Arc<P>,
}

impl<A, BM, M, P> AssetService<A, BM, M, P> {
    /// Create a new service with its repositories and the dependency probe.
    pub fn new(assets: Arc<A>, memberships: Arc<BM>, members: Arc<M>, dependencies: Arc<P>) -> Self {
        Self {
            assets,
            memberships,
            members,
            dependencies,
        }
    }
}

impl<A, BM, M, P> AssetService<A, BM, M, P>
where
    A: AssetRepository,
    BM: BookMemberRepository,
    M: MemberRepository,
    P: AssetDependencyProbe,
{
    /// Every asset operation is gated on the caller's book membership; the
    /// same check also validates an attributed owner.
    async fn require_member(&self, book_id: i64, member_id: i64) -> Result<(), Error> {
        let is_member = self
            .memberships
            .exists(book_id, member_id)
            .await
            .map_err(|e| store_error("book member repository", e))?;
        if !is_member {
            return Err(not_book_member());
        }
        Ok(())
    }

    /// Attach the attributed member's nickname, best effort: a missing
    /// member record yields no nickname rather than an error.
    async fn enrich(&self, asset: Asset) -> Result<AssetDetails, Error> {
        let owner_nickname = match asset.owner_member_id {
            Some(owner_id) => self
                .members
                .find_by_id(owner_id)
                .await
                .map_err(|e| store_error("member repository", e))?
                .map(|m| m.nickname),
            None => None,
        };
        Ok(AssetDetails {
            asset,
            owner_nickname,
        })
    }

    async fn load(&self, asset_id: i64, book_id: i64) -> Result<Asset, Error> {
        self.assets
            .find_in_book(asset_id, book_id)
            .await
            .map_err(|e| store_error("asset repository", e))?
            .ok_or_else(asset_not_found)
    }
}

#[async_trait]
impl<A, BM, M, P> AssetCommand for AssetService<A, BM, M, P>
where
    A: AssetRepository,
    BM: BookMemberRepository,
    M: MemberRepository,
    P: AssetDependencyProbe,
{
    async fn create_asset(&self, request: CreateAssetRequest) -> Result<AssetDetails, Error> {
        self.require_member(request.book_id, request.requester_id)
            .await?;
        if let Some(owner_id) = request.owner_member_id {
            self.require_member(request.book_id, owner_id).await?;
        }
        validate_name(&request.name)?;

        let record = NewAssetRecord {
            book_id: request.book_id,
            name: request.name,
            balance: request.balance,
            owner_member_id: request.owner_member_id,
        };
        let created = self
            .assets
            .insert(&record)
            .await
            .map_err(|e| store_error("asset repository", e))?;
        self.enrich(created).await
    }

    async fn update_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
        patch: AssetPatch,
    ) -> Result<AssetDetails, Error> {
        self.require_member(book_id, requester_id).await?;
        let asset = self.load(asset_id, book_id).await?;

        if let Some(owner_id) = patch.owner_member_id {
            self.require_member(book_id, owner_id).await?;
        }
        if let Some(name) = &patch.name {
            if !name.trim().is_empty() {
                validate_name(name)?;
            }
        }

        let changes = asset.merge_patch(&patch);
        let updated = self
            .assets
            .update(asset_id, &changes)
            .await
            .map_err(|e| store_error("asset repository", e))?
            .ok_or_else(asset_not_found)?;
        self.enrich(updated).await
    }

    async fn delete_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
    ) -> Result<(), Error> {
        self.require_member(book_id, requester_id).await?;
        let asset = self.load(asset_id, book_id).await?;

        let blocked = self
            .dependencies
            .has_dependents(asset.id)
            .await
            .map_err(|e| store_error("asset dependency probe", e))?;
        if blocked {
            return Err(asset_has_dependents());
        }

        self.assets
            .delete(asset.id)
            .await
            .map_err(|e| store_error("asset repository", e))
    }
}

#[async_trait]
impl<A, BM, M, P> AssetQuery for AssetService<A, BM, M, P>
where
    A: AssetRepository,
    BM: BookMemberRepository,
    M: MemberRepository,
    P: AssetDependencyProbe,
{
    async fn get_asset(
        &self,
        book_id: i64,
        requester_id: i64,
        asset_id: i64,
    ) -> Result<AssetDetails, Error> {
        self.require_member(book_id, requester_id).await?;
        let asset = self.load(asset_id, book_id).await?;
        self.enrich(asset).await
    }

    async fn list_assets(
        &self,
        book_id: i64,
        requester_id: i64,
    ) -> Result<Vec<AssetDetails>, Error> {
        self.require_member(book_id, requester_id).await?;
        let assets = self
            .assets
            .list_by_book(book_id)
            .await
            .map_err(|e| store_error("asset repository", e))?;

        let mut details = Vec::with_capacity(assets.len());
        for asset in assets {
            details.push(self.enrich(asset).await?);
        }
        Ok(details)
    }

    async fn total_assets(&self, book_id: i64, requester_id: i64) -> Result<AssetTotals, Error> {
        self.require_member(book_id, requester_id).await?;
        let assets = self
            .assets
            .list_by_book(book_id)
            .await
            .map_err(|e| store_error("asset repository", e))?;

        let total_balance = assets
            .iter()
            .fold(0_i64, |sum, asset| sum.saturating_add(asset.balance));
        let asset_count = assets.len() as i64;
        Ok(AssetTotals {
            total_balance,
            asset_count,
        })
    }
}

#[cfg(test)]
#[path = "asset_service_tests.rs"]
mod tests;
