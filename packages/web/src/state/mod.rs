//! Per-view state hooks

use dioxus::prelude::*;
use directory::{DirectoryStore, LoadState};

use crate::source::directory_source;

/// Directory load owned by the calling view.
///
/// Fetches once per mount. The task belongs to the component's scope, so an
/// unmounted view never receives the late result.
#[derive(Clone, Copy)]
pub struct DirectoryHandle {
    resource: Resource<LoadState>,
}

impl DirectoryHandle {
    /// Current load state; `Loading` until the fetch settles.
    pub fn state(&self) -> LoadState {
        self.resource.cloned().unwrap_or_default()
    }
}

/// Fetch the roster into a fresh store and return where it settled.
async fn load_directory() -> LoadState {
    let source = directory_source();
    let mut store = DirectoryStore::new();
    let state = store.load(source.as_ref()).await;
    state.clone()
}

/// Hook to load the directory for the current view
pub fn use_directory() -> DirectoryHandle {
    let resource = use_resource(load_directory);
    DirectoryHandle { resource }
}
