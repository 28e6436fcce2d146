//! Terminal view states: not found, load failure

use dioxus::prelude::*;

use crate::routes::Route;

/// The requested doctor does not exist in the loaded directory
#[component]
pub fn NotFoundNotice(#[props(default = "Doctor not found".to_string())] title: String) -> Element {
    rsx! {
        div {
            class: "max-w-xl mx-auto text-center py-16 px-4",
            div {
                class: "inline-flex items-center justify-center w-20 h-20 rounded-full bg-gray-100 mb-6 text-4xl",
                "\u{1F468}\u{200D}\u{2695}\u{FE0F}" // 👨‍⚕️
            }
            h2 { class: "text-2xl font-semibold text-gray-900 mb-2", "{title}" }
            p {
                class: "text-gray-500 mb-6",
                "We couldn't find the doctor you were looking for."
            }
            Link {
                to: Route::Directory {},
                class: "px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                "Back to Home"
            }
        }
    }
}

/// The directory itself could not be loaded
#[component]
pub fn UnavailableNotice(message: String) -> Element {
    rsx! {
        div {
            class: "max-w-xl mx-auto text-center py-16 px-4",
            div {
                class: "inline-flex items-center justify-center w-16 h-16 rounded-full bg-red-100 mb-4",
                svg {
                    class: "w-8 h-8 text-red-600",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M12 9v2m0 4h.01m-6.938 4h13.856c1.54 0 2.502-1.667 1.732-3L13.732 4c-.77-1.333-2.694-1.333-3.464 0L3.34 16c-.77 1.333.192 3 1.732 3z"
                    }
                }
            }
            h3 { class: "text-lg font-medium text-gray-900 mb-2", "Unable to load doctors" }
            p { class: "text-gray-500 mb-4", "{message}" }
            Link {
                to: Route::Directory {},
                class: "text-blue-600 hover:text-blue-700 underline",
                "Back to Home"
            }
        }
    }
}
