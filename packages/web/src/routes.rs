//! Route definitions for the application

use dioxus::prelude::*;
use directory::Destination;

use crate::pages::{BookAppointment, Directory, DoctorProfile, PageNotFound, Success};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Directory {},

    #[route("/doctor/:id")]
    DoctorProfile { id: String },

    #[route("/book/:id")]
    BookAppointment { id: String },

    // Only reachable through a confirmed booking
    #[route("/success")]
    Success {},

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Directory => Route::Directory {},
            Destination::Profile(id) => Route::DoctorProfile { id: id.to_string() },
            Destination::Book(id) => Route::BookAppointment { id: id.to_string() },
            Destination::Confirmation => Route::Success {},
        }
    }
}

/// Named path parameter of `route`.
pub fn route_param(route: &Route, name: &str) -> Option<String> {
    match (route, name) {
        (Route::DoctorProfile { id }, "id") | (Route::BookAppointment { id }, "id") => {
            Some(id.clone())
        }
        _ => None,
    }
}
