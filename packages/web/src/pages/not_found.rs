//! Fallback for unknown paths

use dioxus::prelude::*;

use crate::components::NotFoundNotice;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");

    rsx! {
        NotFoundNotice { title: "Page not found" }
    }
}
