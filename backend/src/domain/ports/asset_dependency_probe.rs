//! Port guarding asset deletion against dependent records.
//!
//! The product rule is that an asset with transaction history must not be
//! deleted. No transactions domain exists yet, so the check is a pluggable
//! collaborator: the delete path stays unchanged when the real probe
//! arrives.

use async_trait::async_trait;

use super::RepositoryError;

/// Collaborator answering whether anything still references an asset.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssetDependencyProbe: Send + Sync {
    /// Whether dependent records (e.g. transactions) reference this asset.
    async fn has_dependents(&self, asset_id: i64) -> Result<bool, RepositoryError>;
}

/// Probe used until a transactions domain exists: nothing depends on any
/// asset, so deletion is always allowed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDependentsProbe;

#[async_trait]
impl AssetDependencyProbe for NoDependentsProbe {
    async fn has_dependents(&self, _asset_id: i64) -> Result<bool, RepositoryError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_dependents_probe_always_allows_deletion() {
        let probe = NoDependentsProbe;
        let blocked = probe.has_dependents(42).await.expect("probe succeeds");
        assert!(!blocked);
    }
}
