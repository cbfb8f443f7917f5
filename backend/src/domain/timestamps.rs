//! Audit timestamps shared by persisted entities.

use chrono::{DateTime, Utc};

/// Creation and last-modification instants of a stored record.
///
/// Assigned by the store layer: the database defaults both columns on
/// insert and the adapters bump `updated_at` on every mutation. Entities
/// embed this as a plain field set rather than inheriting it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    /// Record creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    /// Build a timestamp pair from store-assigned instants.
    pub fn new(created_at: DateTime<Utc>, updated_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at,
        }
    }
}
