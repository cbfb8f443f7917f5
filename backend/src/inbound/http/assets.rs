//! Asset HTTP handlers.
//!
//! ```text
//! POST   /api/assets?bookId=
//! GET    /api/assets?bookId=
//! GET    /api/assets/total?bookId=
//! GET    /api/assets/{id}?bookId=
//! PUT    /api/assets/{id}?bookId=
//! DELETE /api/assets/{id}?bookId=
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::asset::{AssetDetails, AssetPatch, AssetTotals};
use crate::domain::ports::CreateAssetRequest;
use crate::inbound::http::envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::identity::MemberIdentity;
use crate::inbound::http::state::HttpState;

/// Book scope every asset endpoint operates in.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BookScopeQuery {
    /// Id of the book the assets belong to.
    pub book_id: i64,
}

/// Request payload for creating an asset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetBody {
    #[schema(example = "Salary account")]
    pub name: String,
    #[schema(example = 1_000_000_i64)]
    pub balance: i64,
    pub owner_member_id: Option<i64>,
}

/// Request payload for a partial asset update.
///
/// `name` and `balance` are left unchanged when absent; `ownerMemberId` is
/// always applied, so omitting it clears the attribution.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAssetBody {
    pub name: Option<String>,
    pub balance: Option<i64>,
    pub owner_member_id: Option<i64>,
}

/// Asset payload returned by the asset endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetBody {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_member_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_nickname: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AssetDetails> for AssetBody {
    fn from(value: AssetDetails) -> Self {
        let AssetDetails {
            asset,
            owner_nickname,
        } = value;
        Self {
            id: asset.id,
            book_id: asset.book_id,
            name: asset.name,
            balance: asset.balance,
            owner_member_id: asset.owner_member_id,
            owner_nickname,
            created_at: asset.timestamps.created_at,
            updated_at: asset.timestamps.updated_at,
        }
    }
}

/// Aggregate payload for the totals endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssetSummaryBody {
    #[schema(example = 1_500_000_i64)]
    pub total_balance: i64,
    #[schema(example = 2_i64)]
    pub asset_count: i64,
}

impl From<AssetTotals> for AssetSummaryBody {
    fn from(value: AssetTotals) -> Self {
        Self {
            total_balance: value.total_balance,
            asset_count: value.asset_count,
        }
    }
}

/// Create an asset in a book.
#[utoipa::path(
    post,
    path = "/api/assets",
    params(BookScopeQuery),
    request_body = CreateAssetBody,
    responses(
        (status = 201, description = "Asset created", body = AssetBody),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Book not found")
    ),
    tags = ["assets"],
    operation_id = "createAsset",
    security(("MemberIdHeader" = []))
)]
#[post("/api/assets")]
pub async fn create_asset(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
    payload: web::Json<CreateAssetBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let details = state
        .assets
        .create_asset(CreateAssetRequest {
            book_id: scope.book_id,
            requester_id: identity.id(),
            name: body.name,
            balance: body.balance,
            owner_member_id: body.owner_member_id,
        })
        .await?;
    Ok(envelope::created(AssetBody::from(details)))
}

/// List all assets of a book.
#[utoipa::path(
    get,
    path = "/api/assets",
    params(BookScopeQuery),
    responses(
        (status = 200, description = "Assets of the book", body = [AssetBody]),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Book not found")
    ),
    tags = ["assets"],
    operation_id = "listAssets",
    security(("MemberIdHeader" = []))
)]
#[get("/api/assets")]
pub async fn list_assets(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
) -> ApiResult<HttpResponse> {
    let details = state
        .assets_query
        .list_assets(scope.book_id, identity.id())
        .await?;
    let bodies: Vec<AssetBody> = details.into_iter().map(AssetBody::from).collect();
    Ok(envelope::ok(bodies))
}

/// Sum and count the book's assets.
///
/// Registered before the `{id}` route so the literal segment wins.
#[utoipa::path(
    get,
    path = "/api/assets/total",
    params(BookScopeQuery),
    responses(
        (status = 200, description = "Totals over the book's assets", body = AssetSummaryBody),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Book not found")
    ),
    tags = ["assets"],
    operation_id = "totalAssets",
    security(("MemberIdHeader" = []))
)]
#[get("/api/assets/total")]
pub async fn total_assets(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
) -> ApiResult<HttpResponse> {
    let totals = state
        .assets_query
        .total_assets(scope.book_id, identity.id())
        .await?;
    Ok(envelope::ok(AssetSummaryBody::from(totals)))
}

/// Load one asset of a book.
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id"), BookScopeQuery),
    responses(
        (status = 200, description = "Asset found", body = AssetBody),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Asset not found")
    ),
    tags = ["assets"],
    operation_id = "getAsset",
    security(("MemberIdHeader" = []))
)]
#[get("/api/assets/{id}")]
pub async fn get_asset(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let details = state
        .assets_query
        .get_asset(scope.book_id, identity.id(), path.into_inner())
        .await?;
    Ok(envelope::ok(AssetBody::from(details)))
}

/// Apply a partial update to an asset.
#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id"), BookScopeQuery),
    request_body = UpdateAssetBody,
    responses(
        (status = 200, description = "Asset updated", body = AssetBody),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Asset not found")
    ),
    tags = ["assets"],
    operation_id = "updateAsset",
    security(("MemberIdHeader" = []))
)]
#[put("/api/assets/{id}")]
pub async fn update_asset(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
    path: web::Path<i64>,
    payload: web::Json<UpdateAssetBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let details = state
        .assets
        .update_asset(
            scope.book_id,
            identity.id(),
            path.into_inner(),
            AssetPatch {
                name: body.name,
                balance: body.balance,
                owner_member_id: body.owner_member_id,
            },
        )
        .await?;
    Ok(envelope::ok(AssetBody::from(details)))
}

/// Delete an asset unless dependent records reference it.
#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    params(("id" = i64, Path, description = "Asset id"), BookScopeQuery),
    responses(
        (status = 200, description = "Asset deleted"),
        (status = 400, description = "Asset has dependent records"),
        (status = 403, description = "Not a member"),
        (status = 404, description = "Asset not found")
    ),
    tags = ["assets"],
    operation_id = "deleteAsset",
    security(("MemberIdHeader" = []))
)]
#[delete("/api/assets/{id}")]
pub async fn delete_asset(
    state: web::Data<HttpState>,
    identity: MemberIdentity,
    scope: web::Query<BookScopeQuery>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    state
        .assets
        .delete_asset(scope.book_id, identity.id(), path.into_inner())
        .await?;
    Ok(envelope::ok_empty())
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod tests;
