//! Registry boundary for publishing and fetching nanopublications.
//!
//! The core pipeline is synchronous and CPU-bound; talking to a registry is
//! the only place where I/O happens. [`Registry`] is the seam: the HTTP
//! implementation pushes finalized TriG to a nanopub server and pulls
//! objects by identifier, the in-memory one backs offline and test flows.
//! Fetched content is always run through the verifier before it is handed
//! to the caller, and the crate never retries on its own: retry policy
//! belongs to the caller.
//!
#![deny(missing_docs)]

/// HTTP registry client.
pub mod http;
/// In-memory registry for tests and offline flows.
pub mod memory;
/// Sign-if-unsigned publication helper.
pub mod publish;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use trustypub_core::{Nanopub, ParseError, SignError};

pub use http::HttpRegistry;
pub use memory::MemoryRegistry;
pub use publish::publish_signed;

/// Default server accepting test publications.
pub const TEST_SERVER: &str = "http://test-server.nanopubs.lod.labs.vu.nl/";

/// Acknowledgement returned by a successful publish.
#[derive(Debug, Clone, Serialize)]
pub struct PublishedInfo {
    /// IRI the published object is addressable under.
    pub uri: String,
    /// Server that accepted the object.
    pub server: String,
    /// When the object was accepted, RFC 3339.
    pub published_at: String,
}

/// Errors surfaced by registry operations.
///
/// Network failures are surfaced verbatim; this crate performs no retries.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server answered {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
    /// No object is stored under the requested identity.
    #[error("no nanopublication found for {0}")]
    NotFound(String),
    /// Only finalized objects can be published.
    #[error("the nanopublication has no trusty identifier and cannot be published")]
    Unfinalized,
    /// Fetched content failed verification and was not trusted.
    #[error("fetched content failed verification: {0}")]
    FailedVerification(String),
    /// Fetched content could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Signing on behalf of publish failed.
    #[error(transparent)]
    Sign(#[from] SignError),
    /// The object could not be serialized for transport.
    #[error("serialization failed: {0}")]
    Serialize(String),
}

/// A store of nanopublications keyed by their trusty identifier.
#[async_trait]
pub trait Registry: Send + Sync {
    /// Publishes a finalized, already-hashed object.
    async fn publish(&self, np: &Nanopub) -> Result<PublishedInfo, RegistryError>;

    /// Retrieves an object by trusty identifier or full URI.
    ///
    /// Implementations run the verifier before returning; content failing
    /// integrity or authenticity is an error, never a trusted object.
    async fn fetch(&self, identity: &str) -> Result<Nanopub, RegistryError>;
}

/// Parses and verifies retrieved content before handing it to the caller.
///
/// A failure here leaves nothing marked as trusted: the error carries the
/// verifier's messages and the object is dropped.
pub(crate) fn verify_fetched(rdf: &str, identity: &str) -> Result<Nanopub, RegistryError> {
    let np = Nanopub::new(rdf)?;
    let report = np.check();
    if !report.integrity {
        return Err(RegistryError::FailedVerification(report.messages.join("; ")));
    }
    if report.authenticity == Some(false) {
        return Err(RegistryError::FailedVerification(report.messages.join("; ")));
    }
    if let Some(trusty) = &np.info().trusty {
        if !identity.ends_with(trusty.as_str()) && !identity.is_empty() {
            return Err(RegistryError::FailedVerification(format!(
                "retrieved object carries {trusty}, expected {identity}"
            )));
        }
    }
    Ok(np)
}
