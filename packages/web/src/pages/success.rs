//! Booking confirmation page component

use dioxus::prelude::*;

use crate::routes::Route;

/// Shown after a booking is confirmed
#[component]
pub fn Success() -> Element {
    rsx! {
        div {
            class: "min-h-screen flex items-center justify-center bg-green-50 px-4",
            div {
                class: "bg-white p-8 rounded-xl shadow-sm border border-green-100 text-center max-w-md",
                h1 { class: "text-3xl font-bold text-green-600 mb-4", "Appointment Booked!" }
                p {
                    class: "text-gray-700 mb-6",
                    "Your appointment has been successfully scheduled. You will receive a confirmation email shortly."
                }
                Link {
                    to: Route::Directory {},
                    class: "px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 transition-colors",
                    "Back to Home"
                }
            }
        }
    }
}
