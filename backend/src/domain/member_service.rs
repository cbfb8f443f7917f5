//! Member registration and profile services.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::failures::{duplicate_email, member_not_found, store_error};
use crate::domain::member::{
    validate_email, validate_nickname, validate_profile_image_url, Member,
};
use crate::domain::ports::{
    InviteCodeSource, MemberCommand, MemberQuery, MemberRepository, NewMemberRecord, ProfilePatch,
    RegisterMemberRequest, UpdateProfileRequest,
};
use crate::domain::Error;

/// Unique constraint on the members email column.
pub(crate) const EMAIL_CONSTRAINT: &str = "uq_members_email";
/// Unique constraint on the books invite-code column.
pub(crate) const INVITE_CODE_CONSTRAINT: &str = "uq_books_invite_code";

/// How often registration retries with a fresh invite code when the random
/// draw collides with a stored one.
const REGISTER_CODE_ATTEMPTS: u32 = 3;

/// Service implementing the member driving ports.
///
/// Registration and the auto-creation of the member's book are one unit:
/// the repository persists member, book, and OWNER membership atomically.
#[derive(Clone)]
pub struct MemberService<R, G> {
    members: Arc<R>,
    invite_codes: Arc<G>,
}

impl<R, G> MemberService<R, G> {
    /// Create a new service with the member repository and code source.
    pub fn new(members: Arc<R>, invite_codes: Arc<G>) -> Self {
        Self {
            members,
            invite_codes,
        }
    }
}

#[async_trait]
impl<R, G> MemberCommand for MemberService<R, G>
where
    R: MemberRepository,
    G: InviteCodeSource,
{
    async fn register(&self, request: RegisterMemberRequest) -> Result<Member, Error> {
        validate_email(&request.email)?;
        validate_nickname(&request.nickname)?;

        let exists = self
            .members
            .email_exists(&request.email)
            .await
            .map_err(|e| store_error("member repository", e))?;
        if exists {
            return Err(duplicate_email());
        }

        let record = NewMemberRecord {
            email: request.email,
            nickname: request.nickname,
        };
        let book_name = format!("{}'s book", record.nickname);

        for _ in 0..REGISTER_CODE_ATTEMPTS {
            let invite_code = self.invite_codes.generate();
            match self
                .members
                .create_with_owned_book(&record, &book_name, &invite_code)
                .await
            {
                Ok((member, book)) => {
                    info!(member_id = member.id, book_id = book.id, "member registered");
                    return Ok(member);
                }
                // The pre-check can race a concurrent registration.
                Err(e) if e.violates(EMAIL_CONSTRAINT) => return Err(duplicate_email()),
                Err(e) if e.violates(INVITE_CODE_CONSTRAINT) => {
                    debug!("invite code collided at registration, retrying");
                }
                Err(e) => return Err(store_error("member repository", e)),
            }
        }
        Err(Error::internal(
            "could not draw a unique invite code during registration",
        ))
    }

    async fn update_profile(
        &self,
        member_id: i64,
        request: UpdateProfileRequest,
    ) -> Result<Member, Error> {
        if let Some(nickname) = &request.nickname {
            validate_nickname(nickname)?;
        }
        if let Some(url) = &request.profile_image_url {
            validate_profile_image_url(url)?;
        }

        let patch = ProfilePatch {
            nickname: request.nickname,
            profile_image_url: request.profile_image_url,
        };
        self.members
            .update_profile(member_id, &patch)
            .await
            .map_err(|e| store_error("member repository", e))?
            .ok_or_else(member_not_found)
    }
}

#[async_trait]
impl<R, G> MemberQuery for MemberService<R, G>
where
    R: MemberRepository,
    G: InviteCodeSource,
{
    async fn get_member(&self, member_id: i64) -> Result<Member, Error> {
        self.members
            .find_by_id(member_id)
            .await
            .map_err(|e| store_error("member repository", e))?
            .ok_or_else(member_not_found)
    }
}

#[cfg(test)]
#[path = "member_service_tests.rs"]
mod tests;
