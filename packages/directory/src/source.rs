//! Where the provider document comes from.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::{DirectoryError, Result};
use crate::types::{Provider, Snapshot};

/// Decode the provider document (a JSON array) into a snapshot.
pub fn parse_document(bytes: &[u8]) -> Result<Snapshot> {
    let providers: Vec<Provider> = serde_json::from_slice(bytes)?;
    Snapshot::new(providers)
}

/// A read-only origin of the provider collection.
///
/// Futures are not required to be `Send`; in the browser everything runs on
/// one thread.
#[async_trait(?Send)]
pub trait ProviderSource {
    async fn fetch(&self) -> Result<Snapshot>;
}

/// Fetches the document over HTTP. Needs an absolute URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait(?Send)]
impl ProviderSource for HttpSource {
    async fn fetch(&self) -> Result<Snapshot> {
        debug!(url = %self.url, "Fetching provider document");

        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let bytes = resp.bytes().await?;
        let snapshot = parse_document(&bytes)?;
        info!(count = snapshot.len(), "Fetched provider document");
        Ok(snapshot)
    }
}
