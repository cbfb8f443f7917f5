//! Member HTTP handlers.
//!
//! ```text
//! POST /api/members
//! GET  /api/members/{id}
//! PUT  /api/members/{id}
//! ```

use actix_web::{get, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::member::Member;
use crate::domain::ports::{RegisterMemberRequest, UpdateProfileRequest};
use crate::inbound::http::envelope;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request payload for registering a member.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMemberBody {
    #[schema(example = "alice@example.com")]
    pub email: String,
    #[schema(example = "Alice")]
    pub nickname: String,
}

/// Request payload for a partial profile update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberBody {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Member payload returned by the member endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberBody {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Member> for MemberBody {
    fn from(value: Member) -> Self {
        Self {
            id: value.id,
            email: value.email,
            nickname: value.nickname,
            profile_image_url: value.profile_image_url,
            created_at: value.timestamps.created_at,
            updated_at: value.timestamps.updated_at,
        }
    }
}

/// Register a member; their personal book is created alongside.
#[utoipa::path(
    post,
    path = "/api/members",
    request_body = RegisterMemberBody,
    responses(
        (status = 201, description = "Member registered", body = MemberBody),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email already registered")
    ),
    tags = ["members"],
    operation_id = "registerMember"
)]
#[post("/api/members")]
pub async fn register_member(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterMemberBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let member = state
        .members
        .register(RegisterMemberRequest {
            email: body.email,
            nickname: body.nickname,
        })
        .await?;
    Ok(envelope::created(MemberBody::from(member)))
}

/// Load a member by id.
#[utoipa::path(
    get,
    path = "/api/members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    responses(
        (status = 200, description = "Member found", body = MemberBody),
        (status = 404, description = "Member not found")
    ),
    tags = ["members"],
    operation_id = "getMember"
)]
#[get("/api/members/{id}")]
pub async fn get_member(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let member = state.members_query.get_member(path.into_inner()).await?;
    Ok(envelope::ok(MemberBody::from(member)))
}

/// Update a member's profile; absent fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/members/{id}",
    params(("id" = i64, Path, description = "Member id")),
    request_body = UpdateMemberBody,
    responses(
        (status = 200, description = "Profile updated", body = MemberBody),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Member not found")
    ),
    tags = ["members"],
    operation_id = "updateMember"
)]
#[put("/api/members/{id}")]
pub async fn update_member(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UpdateMemberBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let member = state
        .members
        .update_profile(
            path.into_inner(),
            UpdateProfileRequest {
                nickname: body.nickname,
                profile_image_url: body.profile_image_url,
            },
        )
        .await?;
    Ok(envelope::ok(MemberBody::from(member)))
}

#[cfg(test)]
#[path = "members_tests.rs"]
mod tests;
