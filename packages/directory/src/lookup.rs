//! Resolving a routed provider id against a directory load.

use crate::store::LoadState;
use crate::types::{Provider, ProviderId};

/// Parse the `:id` route parameter. Absent or malformed ids yield `None`.
pub fn parse_provider_id(raw: Option<&str>) -> Option<ProviderId> {
    raw?.parse().ok()
}

/// What a provider-scoped view (profile, booking) should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderLookup {
    Loading,
    Found(Provider),
    /// Data loaded but no such provider, or the id was unusable.
    NotFound,
    /// The directory itself could not be loaded.
    Unavailable(String),
}

impl ProviderLookup {
    pub fn resolve(load: &LoadState, raw_id: Option<&str>) -> Self {
        let Some(id) = parse_provider_id(raw_id) else {
            return ProviderLookup::NotFound;
        };

        match load {
            LoadState::Loading => ProviderLookup::Loading,
            LoadState::Failed(message) => ProviderLookup::Unavailable(message.clone()),
            LoadState::Loaded(snapshot) => snapshot
                .find(id)
                .cloned()
                .map_or(ProviderLookup::NotFound, ProviderLookup::Found),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::fixtures::*;

    #[test]
    fn test_parse_provider_id() {
        assert_eq!(parse_provider_id(Some("2")), Some(ProviderId(2)));
        assert_eq!(parse_provider_id(Some("abc")), None);
        assert_eq!(parse_provider_id(Some("")), None);
        assert_eq!(parse_provider_id(None), None);
    }

    #[test]
    fn test_resolve_found() {
        let load = LoadState::Loaded(alice_and_bob());
        match ProviderLookup::resolve(&load, Some("1")) {
            ProviderLookup::Found(p) => assert_eq!(p.name, "Alice"),
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_missing_id_is_not_found() {
        let load = LoadState::Loaded(alice_and_bob());
        assert_eq!(ProviderLookup::resolve(&load, Some("42")), ProviderLookup::NotFound);
    }

    #[test]
    fn test_resolve_malformed_id_skips_loading() {
        assert_eq!(
            ProviderLookup::resolve(&LoadState::Loading, Some("x1")),
            ProviderLookup::NotFound
        );
    }

    #[test]
    fn test_resolve_waits_for_load() {
        assert_eq!(
            ProviderLookup::resolve(&LoadState::Loading, Some("1")),
            ProviderLookup::Loading
        );
    }

    #[test]
    fn test_resolve_load_failure_is_unavailable() {
        let load = LoadState::Failed("Network error".into());
        assert_eq!(
            ProviderLookup::resolve(&load, Some("1")),
            ProviderLookup::Unavailable("Network error".into())
        );
    }
}
