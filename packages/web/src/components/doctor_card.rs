//! Doctor card component

use dioxus::prelude::*;
use directory::{Destination, Provider};

use super::Avatar;
use crate::routes::Route;

/// Props for DoctorCard
#[derive(Props, Clone, PartialEq)]
pub struct DoctorCardProps {
    pub provider: Provider,
}

/// Card in the directory grid
#[component]
pub fn DoctorCard(props: DoctorCardProps) -> Element {
    let provider = &props.provider;
    let profile: Route = Destination::Profile(provider.id).into();

    rsx! {
        div {
            class: "rounded-xl border border-gray-200 bg-white p-5 hover:shadow-lg transition-all duration-200 flex flex-col h-full",

            Avatar { provider: provider.clone() }

            h3 {
                class: "text-lg font-semibold text-gray-900 text-center",
                "{provider.name}"
            }
            p {
                class: "text-sm text-center text-gray-700",
                "{provider.speciality}"
            }
            p {
                class: "text-sm text-center text-gray-500 mb-4",
                "{provider.hospital}"
            }

            div {
                class: "mt-auto text-center",
                Link {
                    to: profile,
                    class: "inline-block bg-blue-600 text-white px-4 py-2 rounded-lg hover:bg-blue-700 transition-colors text-sm font-medium",
                    "View Profile"
                }
            }
        }
    }
}
