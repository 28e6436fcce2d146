//! Doctor profile page component

use dioxus::prelude::*;
use directory::{Destination, ProviderLookup, RouteContext};

use crate::components::{Avatar, LoadingSpinner, NotFoundNotice, UnavailableNotice};
use crate::route_context::use_route_context;
use crate::routes::Route;
use crate::state::use_directory;

/// Profile page - one doctor's details and a link to book
#[component]
pub fn DoctorProfile(id: String) -> Element {
    let route = use_route_context();
    let directory = use_directory();

    let raw_id = route.param("id").unwrap_or(id);
    let lookup = ProviderLookup::resolve(&directory.state(), Some(&raw_id));

    let provider = match lookup {
        ProviderLookup::Loading => {
            return rsx! { LoadingSpinner { message: "Loading doctor information..." } };
        }
        ProviderLookup::NotFound => return rsx! { NotFoundNotice {} },
        ProviderLookup::Unavailable(message) => return rsx! { UnavailableNotice { message } },
        ProviderLookup::Found(provider) => provider,
    };

    let book: Route = Destination::Book(provider.id).into();
    let availability_class = match provider.available {
        Some(true) => "text-green-600",
        _ => "text-red-600",
    };

    rsx! {
        div {
            class: "max-w-2xl mx-auto p-6",

            div {
                class: "mb-4",
                Link {
                    to: Route::Directory {},
                    class: "text-blue-600 hover:text-blue-700 text-sm inline-block",
                    "\u{2190} Back to Home"
                }
            }

            div {
                class: "bg-white border border-gray-200 rounded-xl shadow-sm p-6",
                Avatar { provider: provider.clone(), size: "w-32 h-32" }
                h2 {
                    class: "text-2xl font-semibold text-center text-gray-900",
                    "{provider.name}"
                }
                p {
                    class: "text-center text-gray-600",
                    "{provider.speciality} at {provider.hospital}"
                }
                if let Some(label) = provider.availability_label() {
                    p {
                        class: "mt-3 text-center font-semibold {availability_class}",
                        "{label}"
                    }
                }

                div {
                    class: "mt-6 text-center",
                    Link {
                        to: book,
                        class: "px-5 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                        "Book Appointment"
                    }
                }
            }
        }
    }
}
