//! Router-backed navigation capability handed to pages.

use dioxus::prelude::*;
use directory::{Destination, RouteContext};
use tracing::debug;

use crate::routes::{route_param, Route};

/// [`RouteContext`] over the Dioxus router.
#[derive(Clone)]
pub struct DioxusRoute {
    route: Route,
    navigator: Navigator,
}

impl RouteContext for DioxusRoute {
    fn param(&self, name: &str) -> Option<String> {
        route_param(&self.route, name)
    }

    fn location(&self) -> String {
        self.route.to_string()
    }

    fn navigate(&self, to: Destination) {
        debug!(from = %self.location(), to = %to, "Navigating");
        self.navigator.push(Route::from(to));
    }
}

/// Hook to access the current route as a [`RouteContext`]
pub fn use_route_context() -> DioxusRoute {
    DioxusRoute {
        route: use_route::<Route>(),
        navigator: use_navigator(),
    }
}
