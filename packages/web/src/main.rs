//! Doctor Directory - Dioxus Web Application
//!
//! Browse a static roster of doctors, open a profile and send a booking
//! request. The roster is a JSON document fetched once per page visit.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! dx serve --features web
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```

#![allow(non_snake_case)]

mod app;
mod components;
mod config;
mod logging;
mod pages;
mod platform;
mod route_context;
mod routes;
mod source;
mod state;

fn main() {
    logging::init();

    #[cfg(feature = "server")]
    {
        match config::from_env() {
            Ok(settings) => config::init_config(settings),
            Err(e) => tracing::warn!(error = %e, "Ignoring invalid environment configuration"),
        }
    }

    dioxus::launch(app::App);
}
