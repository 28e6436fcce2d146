//! Addressable views and the navigation capability injected into them.

use std::fmt;

use crate::types::ProviderId;

/// A view the app can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Directory,
    Profile(ProviderId),
    Book(ProviderId),
    /// Reachable only through a successful booking submission.
    Confirmation,
}

impl Destination {
    pub fn path(&self) -> String {
        match self {
            Destination::Directory => "/".to_string(),
            Destination::Profile(id) => format!("/doctor/{}", id),
            Destination::Book(id) => format!("/book/{}", id),
            Destination::Confirmation => "/success".to_string(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Route access for views: read parameters, read the location, navigate.
///
/// Views take this instead of talking to a router directly, so the same
/// logic runs against the browser router or a recording stub.
pub trait RouteContext {
    /// A named path parameter of the current route, such as `id`.
    fn param(&self, name: &str) -> Option<String>;

    /// The current path.
    fn location(&self) -> String;

    fn navigate(&self, to: Destination);
}
