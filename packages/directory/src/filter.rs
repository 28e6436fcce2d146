//! Search and specialty filtering over a directory snapshot.
//!
//! Filtering is a pure function of `(snapshot, query, category)`: no hidden
//! state, no ranking, snapshot order preserved.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{Provider, Snapshot};

/// Narrow `snapshot` to providers matching both the category and the query.
///
/// An empty `category` or `query` places no constraint. The category is an
/// exact, case-sensitive match on `speciality`; the query is a
/// case-insensitive substring match on name, speciality or hospital.
pub fn filter(snapshot: &Snapshot, query: &str, category: &str) -> Vec<Provider> {
    let query = query.to_lowercase();

    let filtered: Vec<Provider> = snapshot
        .iter()
        .filter(|provider| category.is_empty() || provider.speciality == category)
        .filter(|provider| query.is_empty() || matches_query(provider, &query))
        .cloned()
        .collect();

    debug!(
        query = %query,
        category,
        total = snapshot.len(),
        matched = filtered.len(),
        "Filtered directory"
    );

    filtered
}

/// `query` must already be lowercased.
fn matches_query(provider: &Provider, query: &str) -> bool {
    provider.name.to_lowercase().contains(query)
        || provider.speciality.to_lowercase().contains(query)
        || provider.hospital.to_lowercase().contains(query)
}

/// Distinct specialities in first-seen order.
pub fn categories(snapshot: &Snapshot) -> Vec<String> {
    let mut seen = HashSet::new();
    snapshot
        .iter()
        .filter(|p| seen.insert(p.speciality.as_str()))
        .map(|p| p.speciality.clone())
        .collect()
}

/// Transient search state of the directory view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Option<String>,
}

impl FilterCriteria {
    /// Select a category chip; an empty string selects "All Specialties".
    pub fn select_category(&mut self, category: &str) {
        self.category = (!category.is_empty()).then(|| category.to_string());
    }

    /// Reset query and category together.
    pub fn clear(&mut self) {
        self.query.clear();
        self.category = None;
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category.is_some()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        match &self.category {
            Some(selected) => selected == category,
            None => category.is_empty(),
        }
    }

    pub fn apply(&self, snapshot: &Snapshot) -> Vec<Provider> {
        filter(snapshot, &self.query, self.category.as_deref().unwrap_or(""))
    }
}

/// Headline shown above the result grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub count: usize,
}

impl ResultSummary {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn headline(&self) -> String {
        match self.count {
            0 => "No Doctors Found".to_string(),
            1 => "Found 1 Doctor".to_string(),
            n => format!("Found {} Doctors", n),
        }
    }
}

/// Counts for the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectoryStats {
    pub doctors: usize,
    pub specialties: usize,
}

impl DirectoryStats {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            doctors: snapshot.len(),
            specialties: categories(snapshot).len(),
        }
    }
}
