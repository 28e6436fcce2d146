//! One-shot directory load for a single view activation.

use tracing::{info, warn};

use crate::error::Result;
use crate::source::ProviderSource;
use crate::types::Snapshot;

/// Where a directory load stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(Snapshot),
    /// Terminal for this activation; carries a user-presentable message.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

impl From<Result<Snapshot>> for LoadState {
    fn from(result: Result<Snapshot>) -> Self {
        match result {
            Ok(snapshot) => LoadState::Loaded(snapshot),
            Err(e) => LoadState::Failed(e.to_string()),
        }
    }
}

/// Owns the snapshot for the directory view.
///
/// The state leaves `Loading` exactly once. There is no retry and no
/// invalidation: a new activation gets a new store.
#[derive(Debug, Default)]
pub struct DirectoryStore {
    state: LoadState,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.state.snapshot()
    }

    /// Record the outcome of the fetch. Returns `false` if already settled.
    pub fn settle(&mut self, result: Result<Snapshot>) -> bool {
        if !self.state.is_loading() {
            warn!("Directory already settled; ignoring late load result");
            return false;
        }

        match &result {
            Ok(snapshot) => info!(count = snapshot.len(), "Directory loaded"),
            Err(e) => warn!(error = %e, "Directory load failed"),
        }
        self.state = result.into();
        true
    }

    /// Fetch from `source` and settle. A no-op once settled.
    pub async fn load<S: ProviderSource + ?Sized>(&mut self, source: &S) -> &LoadState {
        if self.state.is_loading() {
            let result = source.fetch().await;
            self.settle(result);
        }
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectoryError;
    use crate::types::fixtures::*;

    #[test]
    fn test_new_store_is_loading() {
        let store = DirectoryStore::new();
        assert!(store.state().is_loading());
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_settle_success() {
        let mut store = DirectoryStore::new();
        assert!(store.settle(Ok(alice_and_bob())));
        assert_eq!(store.snapshot().map(|s| s.len()), Some(2));
    }

    #[test]
    fn test_settle_failure_is_distinct_from_loading() {
        let mut store = DirectoryStore::new();
        store.settle(Err(DirectoryError::Fetch("offline".into())));
        assert_eq!(
            store.state(),
            &LoadState::Failed("Fetch failed: offline".to_string())
        );
        assert!(!store.state().is_loading());
    }

    #[test]
    fn test_settle_only_once() {
        let mut store = DirectoryStore::new();
        assert!(store.settle(Err(DirectoryError::Fetch("offline".into()))));
        assert!(!store.settle(Ok(alice_and_bob())));
        assert!(matches!(store.state(), LoadState::Failed(_)));
    }
}
