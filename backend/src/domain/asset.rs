//! Named balances tracked inside a book.

use serde_json::json;

use crate::domain::timestamps::Timestamps;
use crate::domain::Error;

/// Bounds for asset names, matching the stored column width.
pub const ASSET_NAME_MAX_LEN: usize = 100;

/// A named balance scoped to a book, optionally attributed to one member.
///
/// Balances are signed integers in the smallest currency unit; the domain
/// performs no fractional or rounding arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    pub id: i64,
    pub book_id: i64,
    pub name: String,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
    pub timestamps: Timestamps,
}

impl Asset {
    /// Compute the stored field values after applying a partial update.
    ///
    /// The fields deliberately follow different policies: `name` is replaced
    /// only when present and non-blank, `balance` only when present, while
    /// `owner_member_id` is always overwritten with the patch value —
    /// including `None`, which clears the attribution.
    pub fn merge_patch(&self, patch: &AssetPatch) -> AssetChanges {
        let name = match &patch.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => self.name.clone(),
        };
        let balance = patch.balance.unwrap_or(self.balance);
        AssetChanges {
            name,
            balance,
            owner_member_id: patch.owner_member_id,
        }
    }
}

/// Partial update as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub balance: Option<i64>,
    pub owner_member_id: Option<i64>,
}

/// Final field values written back to the store after a patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetChanges {
    pub name: String,
    pub balance: i64,
    pub owner_member_id: Option<i64>,
}

/// Read-side view of an asset, enriched with the owning member's nickname
/// when one is attributed and resolvable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDetails {
    pub asset: Asset,
    pub owner_nickname: Option<String>,
}

/// Aggregate over all assets of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTotals {
    pub total_balance: i64,
    pub asset_count: i64,
}

/// Validate an asset name against the 1–100 character bound.
pub fn validate_name(name: &str) -> Result<(), Error> {
    let len = name.chars().count();
    if len == 0 || len > ASSET_NAME_MAX_LEN {
        return Err(Error::invalid_request(format!(
            "asset name must be between 1 and {ASSET_NAME_MAX_LEN} characters"
        ))
        .with_details(json!({ "field": "name", "code": "invalid_asset_name" })));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn salary_owned_by(owner: Option<i64>) -> Asset {
        let now = Utc::now();
        Asset {
            id: 7,
            book_id: 1,
            name: "Salary".to_owned(),
            balance: 1_000_000,
            owner_member_id: owner,
            timestamps: Timestamps::new(now, now),
        }
    }

    #[test]
    fn absent_name_and_balance_are_left_unchanged() {
        let asset = salary_owned_by(Some(3));
        let changes = asset.merge_patch(&AssetPatch::default());
        assert_eq!(changes.name, "Salary");
        assert_eq!(changes.balance, 1_000_000);
    }

    #[test]
    fn absent_owner_clears_the_attribution() {
        // Unlike name and balance, the owner field has no
        // "leave unchanged" reading: the patch value always wins.
        let asset = salary_owned_by(Some(3));
        let changes = asset.merge_patch(&AssetPatch::default());
        assert_eq!(changes.owner_member_id, None);
    }

    #[test]
    fn blank_name_is_ignored() {
        let asset = salary_owned_by(None);
        let changes = asset.merge_patch(&AssetPatch {
            name: Some("   ".to_owned()),
            ..AssetPatch::default()
        });
        assert_eq!(changes.name, "Salary");
    }

    #[test]
    fn present_fields_replace_stored_values() {
        let asset = salary_owned_by(None);
        let changes = asset.merge_patch(&AssetPatch {
            name: Some("Bonus".to_owned()),
            balance: Some(42),
            owner_member_id: Some(9),
        });
        assert_eq!(changes.name, "Bonus");
        assert_eq!(changes.balance, 42);
        assert_eq!(changes.owner_member_id, Some(9));
    }

    #[test]
    fn asset_name_bounds() {
        assert!(validate_name("Checking").is_ok());
        assert!(validate_name(&"x".repeat(100)).is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }
}
