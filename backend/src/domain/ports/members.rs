//! Driving ports for member registration and profiles.

use async_trait::async_trait;

use crate::domain::member::Member;
use crate::domain::Error;

/// Payload for registering a new member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterMemberRequest {
    pub email: String,
    pub nickname: String,
}

/// Payload for a partial profile update; `None` leaves a field unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UpdateProfileRequest {
    pub nickname: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Member write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberCommand: Send + Sync {
    /// Register a member; their personal book is created in the same unit.
    async fn register(&self, request: RegisterMemberRequest) -> Result<Member, Error>;

    /// Apply a partial profile update.
    async fn update_profile(
        &self,
        member_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Member, Error>;
}

/// Member read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MemberQuery: Send + Sync {
    /// Load a member by id.
    async fn get_member(&self, member_id: i64) -> Result<Member, Error>;
}
