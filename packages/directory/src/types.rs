//! Provider model and the per-activation directory snapshot.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DirectoryError, Result};

/// Identifier of a provider within one loaded directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderId(pub i64);

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProviderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse().map(ProviderId)
    }
}

/// A healthcare provider as published in the directory document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub speciality: String,
    pub hospital: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Display only. Does not gate booking. `None` when the document omits it.
    #[serde(default)]
    pub available: Option<bool>,
}

impl Provider {
    /// Availability line for the profile; nothing when availability is unknown.
    pub fn availability_label(&self) -> Option<&'static str> {
        self.available.map(|available| {
            if available {
                "Available Today"
            } else {
                "Not Available Today"
            }
        })
    }
}

/// Immutable, ordered copy of the provider collection for one view activation.
///
/// Clones share the same allocation, so handing a snapshot to several
/// derived computations is cheap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Snapshot {
    providers: Arc<[Provider]>,
}

impl Snapshot {
    /// Build a snapshot, rejecting collections where an id repeats.
    pub fn new(providers: Vec<Provider>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(providers.len());
        for provider in &providers {
            if !seen.insert(provider.id) {
                return Err(DirectoryError::DuplicateId(provider.id));
            }
        }

        Ok(Self {
            providers: providers.into(),
        })
    }

    /// Look up a provider by id. A miss is a normal outcome.
    pub fn find(&self, id: ProviderId) -> Option<&Provider> {
        self.providers.iter().find(|p| p.id == id)
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Provider> {
        self.providers.iter()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn to_vec(&self) -> Vec<Provider> {
        self.providers.to_vec()
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Provider;
    type IntoIter = std::slice::Iter<'a, Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.providers.iter()
    }
}
