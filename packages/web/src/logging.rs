//! Log output for each build target.
//!
//! The browser build writes to the console through the Dioxus logger; the
//! fmt layer stamps events with `SystemTime`, which wasm32 does not provide.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or invalid.
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_DIRECTIVE: &str = "info";

#[cfg(target_arch = "wasm32")]
pub fn init() {
    // Errors only if a subscriber is already installed.
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    let _ = tracing::subscriber::set_global_default(native_subscriber());
}

#[cfg(not(target_arch = "wasm32"))]
fn native_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE)),
        )
        .finish()
}
