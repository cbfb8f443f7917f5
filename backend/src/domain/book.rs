//! Books (shared ledgers) and their invite codes.

use serde_json::json;

use crate::domain::timestamps::Timestamps;
use crate::domain::Error;

/// Bounds for book names, matching the stored column width.
pub const BOOK_NAME_MAX_LEN: usize = 50;

/// A shared ledger owned by one member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub name: String,
    pub invite_code: InviteCode,
    pub owner_id: i64,
    pub timestamps: Timestamps,
}

/// Validate a book name against the 1–50 character bound.
pub fn validate_name(name: &str) -> Result<(), Error> {
    let len = name.chars().count();
    if len == 0 || len > BOOK_NAME_MAX_LEN {
        return Err(Error::invalid_request(format!(
            "book name must be between 1 and {BOOK_NAME_MAX_LEN} characters"
        ))
        .with_details(json!({ "field": "name", "code": "invalid_book_name" })));
    }
    Ok(())
}

/// A six-character join token drawn from `[A-Z0-9]`, globally unique across
/// all books.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InviteCode(String);

impl InviteCode {
    /// Characters an invite code is drawn from.
    pub const CHARSET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    /// Fixed code length.
    pub const LENGTH: usize = 6;

    /// Parse a raw string, rejecting anything outside `^[A-Z0-9]{6}$`.
    pub fn parse(raw: impl Into<String>) -> Result<Self, Error> {
        let raw = raw.into();
        let valid = raw.len() == Self::LENGTH
            && raw
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit());
        if !valid {
            return Err(
                Error::invalid_request("invite code must be 6 uppercase letters or digits")
                    .with_details(json!({ "field": "inviteCode", "code": "invalid_invite_code" })),
            );
        }
        Ok(Self(raw))
    }

    /// Build a code from characters already drawn from [`Self::CHARSET`].
    pub(crate) fn from_charset_draw(raw: String) -> Self {
        debug_assert!(
            raw.len() == Self::LENGTH
                && raw
                    .bytes()
                    .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        );
        Self(raw)
    }

    /// Borrow the raw code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for InviteCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
