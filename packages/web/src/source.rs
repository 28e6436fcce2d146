//! Loading the provider document from the page's origin.

use directory::ProviderSource;

use crate::config::config;

/// Fetch the roster through the browser's `fetch`, relative URLs allowed.
#[cfg(feature = "web")]
pub struct FetchSource {
    url: String,
}

#[cfg(feature = "web")]
impl FetchSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "web")]
#[async_trait::async_trait(?Send)]
impl ProviderSource for FetchSource {
    async fn fetch(&self) -> directory::Result<directory::Snapshot> {
        use directory::DirectoryError;
        use gloo_net::http::Request;

        let resp = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;

        if !resp.ok() {
            return Err(DirectoryError::Status {
                status: resp.status(),
                url: self.url.clone(),
            });
        }

        let bytes = resp
            .binary()
            .await
            .map_err(|e| DirectoryError::Fetch(e.to_string()))?;
        directory::parse_document(&bytes)
    }
}

/// Source for the configured data URL on this build target.
#[cfg(feature = "web")]
pub fn directory_source() -> Box<dyn ProviderSource> {
    Box::new(FetchSource::new(config().data_url.clone()))
}

#[cfg(not(feature = "web"))]
pub fn directory_source() -> Box<dyn ProviderSource> {
    Box::new(directory::HttpSource::new(config().data_url.clone()))
}
