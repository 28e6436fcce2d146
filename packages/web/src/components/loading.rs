//! Loading components

use dioxus::prelude::*;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "min-h-[50vh] flex flex-col items-center justify-center",
            div {
                class: "flex space-x-2",
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.1s" }
                div { class: "w-3 h-3 bg-blue-400 rounded-full animate-bounce", style: "animation-delay: 0.2s" }
            }
            p { class: "mt-4 text-sm text-gray-500", "{message}" }
        }
    }
}

/// Placeholder card shown while the directory loads
#[component]
pub fn DoctorCardSkeleton() -> Element {
    rsx! {
        div {
            class: "rounded-xl border border-gray-100 bg-white p-5 animate-pulse",
            div { class: "w-24 h-24 rounded-full bg-gray-200 mx-auto mb-4" }
            div { class: "h-4 bg-gray-200 rounded w-2/3 mx-auto mb-2" }
            div { class: "h-3 bg-gray-100 rounded w-1/2 mx-auto mb-1" }
            div { class: "h-3 bg-gray-100 rounded w-1/3 mx-auto" }
        }
    }
}
