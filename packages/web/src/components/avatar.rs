//! Provider avatar with silent image fallback

use dioxus::prelude::*;
use directory::{initials, profile_image, Provider};

use crate::config::config;

/// Round profile picture. Missing or broken images show the placeholder.
#[component]
pub fn Avatar(provider: Provider, #[props(default = "w-24 h-24".to_string())] size: String) -> Element {
    let placeholder = config().placeholder_image.as_str();
    let mut broken = use_signal(|| false);

    let src = if broken() {
        placeholder
    } else {
        profile_image(&provider, placeholder)
    };
    let badge = initials(&provider.name);

    rsx! {
        div {
            class: "relative {size} mx-auto mb-4",
            img {
                class: "{size} rounded-full object-cover bg-blue-50",
                src: "{src}",
                alt: "{provider.name}",
                onerror: move |_| broken.set(true),
            }
            if src == placeholder && !badge.is_empty() {
                span {
                    class: "absolute inset-0 flex items-center justify-center text-lg font-semibold text-blue-700",
                    "{badge}"
                }
            }
        }
    }
}
