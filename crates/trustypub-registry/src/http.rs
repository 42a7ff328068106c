use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

use trustypub_core::Nanopub;

use crate::{PublishedInfo, Registry, RegistryError};

/// HTTP client for a nanopub registry server.
///
/// Publishes TriG with `POST <server>` and fetches with
/// `GET <server><identity>` (or the identity itself when it already is a
/// URI). Every request is bounded by the configured timeout, independently
/// of the CPU-bound pipeline; there are no retries.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: reqwest::Client,
    server: String,
}

impl HttpRegistry {
    /// Client for the given server with a per-request timeout.
    pub fn new(server: impl Into<String>, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            server: server.into(),
        })
    }
}

#[async_trait]
impl Registry for HttpRegistry {
    async fn publish(&self, np: &Nanopub) -> Result<PublishedInfo, RegistryError> {
        if np.info().trusty.is_none() {
            return Err(RegistryError::Unfinalized);
        }
        let body = np
            .rdf()
            .map_err(|e| RegistryError::Serialize(e.to_string()))?;
        debug!(server = %self.server, uri = %np.info().uri, "publishing nanopublication");
        let res = self
            .client
            .post(&self.server)
            .header(CONTENT_TYPE, "application/trig")
            .body(body)
            .send()
            .await?;
        match res.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(PublishedInfo {
                uri: np.info().uri.clone(),
                server: self.server.clone(),
                published_at: Utc::now().to_rfc3339(),
            }),
            status => Err(RegistryError::Status {
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            }),
        }
    }

    async fn fetch(&self, identity: &str) -> Result<Nanopub, RegistryError> {
        let url = if identity.starts_with("http") {
            identity.to_string()
        } else {
            format!("{}{}", self.server, identity)
        };
        debug!(url = %url, "fetching nanopublication");
        let res = self
            .client
            .get(&url)
            .header(ACCEPT, "application/trig")
            .send()
            .await?;
        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RegistryError::NotFound(identity.to_string()));
        }
        if !status.is_success() {
            return Err(RegistryError::Status {
                status: status.as_u16(),
                body: res.text().await.unwrap_or_default(),
            });
        }
        let rdf = res.text().await?;
        crate::verify_fetched(&rdf, identity)
    }
}
