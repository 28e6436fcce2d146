//! Application configuration.
//!
//! Browser builds use the bundled assets. Native/server builds may override
//! the data location and confirmation pause through environment variables
//! (`DOCTORS_URL`, `CONFIRMATION_DELAY_MS`), read once at startup.

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use dioxus::prelude::*;
use directory::DirectoryConfig;

static CONFIG: OnceLock<DirectoryConfig> = OnceLock::new();

/// Set the configuration. Call this at startup, before launching the app.
pub fn init_config(config: DirectoryConfig) {
    CONFIG.set(config).ok();
}

/// Get the configured settings, falling back to the bundled defaults.
pub fn config() -> &'static DirectoryConfig {
    CONFIG.get_or_init(bundled_defaults)
}

fn bundled_defaults() -> DirectoryConfig {
    DirectoryConfig::default()
        .with_data_url(asset!("/assets/doctors.json").to_string())
        .with_placeholder_image(asset!("/assets/doctor-placeholder.svg").to_string())
}

/// Load configuration from environment variables
#[cfg(feature = "server")]
pub fn from_env() -> Result<DirectoryConfig> {
    // Load .env file if present (development)
    let _ = dotenvy::dotenv();

    from_lookup(bundled_defaults(), |key| std::env::var(key).ok())
}

/// Apply overrides from `lookup` on top of `base`.
pub fn from_lookup(
    base: DirectoryConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<DirectoryConfig> {
    let mut config = base;

    if let Some(url) = lookup("DOCTORS_URL") {
        config = config.with_data_url(url);
    }

    if let Some(delay) = lookup("CONFIRMATION_DELAY_MS") {
        let millis: u64 = delay
            .trim()
            .parse()
            .context("CONFIRMATION_DELAY_MS must be a whole number of milliseconds")?;
        config = config.with_confirmation_delay(Duration::from_millis(millis));
    }

    Ok(config)
}
