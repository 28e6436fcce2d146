//! Settings for the directory and booking views.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_URL: &str = "/doctors.json";
pub const DEFAULT_CONFIRMATION_DELAY_MS: u64 = 1200;
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "/assets/doctor-placeholder.svg";

/// Settings shared by the directory and booking views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Location of the provider document.
    pub data_url: String,
    /// Pause between an accepted booking and the confirmation page.
    pub confirmation_delay_ms: u64,
    pub placeholder_image: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            confirmation_delay_ms: DEFAULT_CONFIRMATION_DELAY_MS,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl DirectoryConfig {
    pub fn with_data_url(mut self, url: impl Into<String>) -> Self {
        self.data_url = url.into();
        self
    }

    pub fn with_confirmation_delay(mut self, delay: Duration) -> Self {
        self.confirmation_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_placeholder_image(mut self, url: impl Into<String>) -> Self {
        self.placeholder_image = url.into();
        self
    }

    pub fn confirmation_delay(&self) -> Duration {
        Duration::from_millis(self.confirmation_delay_ms)
    }
}
