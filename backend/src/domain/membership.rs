//! Book membership records and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a member within a book.
///
/// Closed set: the creator is the one `Owner` for the book's lifetime and
/// roles never transition after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookRole {
    Owner,
    Member,
}

impl BookRole {
    /// Whether this role grants owner privileges.
    pub fn is_owner(self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Stored representation of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "OWNER",
            Self::Member => "MEMBER",
        }
    }
}

impl std::str::FromStr for BookRole {
    type Err = UnknownRole;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "OWNER" => Ok(Self::Owner),
            "MEMBER" => Ok(Self::Member),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Raised when a stored role value is not part of the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown book role: {0}")]
pub struct UnknownRole(pub String);

/// Join record binding one member to one book with a role.
///
/// At most one record exists per `(book_id, member_id)` pair; the store
/// enforces this with a unique constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookMember {
    pub id: i64,
    pub book_id: i64,
    pub member_id: i64,
    pub role: BookRole,
    pub joined_at: DateTime<Utc>,
}

impl BookMember {
    /// Whether this membership carries the owner role.
    pub fn is_owner(&self) -> bool {
        self.role.is_owner()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn role_round_trips_through_stored_form() {
        for role in [BookRole::Owner, BookRole::Member] {
            assert_eq!(BookRole::from_str(role.as_str()), Ok(role));
        }
    }

    #[test]
    fn unknown_stored_role_is_rejected() {
        let err = BookRole::from_str("ADMIN").expect_err("not a role");
        assert_eq!(err.to_string(), "unknown book role: ADMIN");
    }

    #[test]
    fn role_serialises_as_screaming_snake_case() {
        let json = serde_json::to_string(&BookRole::Owner).expect("serialise");
        assert_eq!(json, "\"OWNER\"");
    }
}
