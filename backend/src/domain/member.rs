//! Member identity records.

use serde_json::json;

use crate::domain::timestamps::Timestamps;
use crate::domain::Error;

/// Bounds for display names, matching the stored column width.
pub const NICKNAME_MIN_LEN: usize = 2;
pub const NICKNAME_MAX_LEN: usize = 20;

const EMAIL_MAX_LEN: usize = 100;
const PROFILE_IMAGE_URL_MAX_LEN: usize = 500;

/// A registered member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: i64,
    pub email: String,
    pub nickname: String,
    pub profile_image_url: Option<String>,
    pub timestamps: Timestamps,
}

/// Validate an email address for registration.
///
/// Lightweight shape check only; uniqueness is enforced by the store.
pub fn validate_email(email: &str) -> Result<(), Error> {
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.len() > EMAIL_MAX_LEN || !trimmed.contains('@') {
        return Err(Error::invalid_request("email must be a valid address")
            .with_details(json!({ "field": "email", "code": "invalid_email" })));
    }
    Ok(())
}

/// Validate a display name against the 2–20 character bound.
pub fn validate_nickname(nickname: &str) -> Result<(), Error> {
    let len = nickname.chars().count();
    if !(NICKNAME_MIN_LEN..=NICKNAME_MAX_LEN).contains(&len) {
        return Err(Error::invalid_request(format!(
            "nickname must be between {NICKNAME_MIN_LEN} and {NICKNAME_MAX_LEN} characters"
        ))
        .with_details(json!({ "field": "nickname", "code": "invalid_nickname" })));
    }
    Ok(())
}

/// Validate a profile image URL against the stored column width.
pub fn validate_profile_image_url(url: &str) -> Result<(), Error> {
    if url.len() > PROFILE_IMAGE_URL_MAX_LEN {
        return Err(Error::invalid_request(format!(
            "profile image URL must be at most {PROFILE_IMAGE_URL_MAX_LEN} characters"
        ))
        .with_details(json!({ "field": "profileImageUrl", "code": "invalid_profile_image_url" })));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("alice@example.com").is_ok());
    }

    #[test]
    fn rejects_blank_and_malformed_emails() {
        for email in ["", "   ", "not-an-address"] {
            let err = validate_email(email).expect_err("must reject");
            assert_eq!(err.code(), ErrorCode::InvalidRequest);
        }
    }

    #[test]
    fn nickname_bounds_are_inclusive() {
        assert!(validate_nickname("ab").is_ok());
        assert!(validate_nickname(&"x".repeat(20)).is_ok());
        assert!(validate_nickname("a").is_err());
        assert!(validate_nickname(&"x".repeat(21)).is_err());
    }

    #[test]
    fn nickname_length_counts_characters_not_bytes() {
        // Two characters, six bytes.
        assert!(validate_nickname("가계").is_ok());
    }
}
