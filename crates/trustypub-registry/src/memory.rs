use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use trustypub_core::Nanopub;

use crate::{PublishedInfo, Registry, RegistryError};

/// In-memory registry backed by a hash map, for tests and offline flows.
///
/// Entries are keyed by the object's URI. Data is lost when the value is
/// dropped.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores raw TriG under a URI, bypassing publication checks.
    ///
    /// Seeding hook for tests; the content is still verified on fetch.
    pub fn insert_raw(&self, uri: impl Into<String>, rdf: impl Into<String>) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(uri.into(), rdf.into());
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.len()
    }

    /// Whether the registry holds no objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Registry for MemoryRegistry {
    async fn publish(&self, np: &Nanopub) -> Result<PublishedInfo, RegistryError> {
        if np.info().trusty.is_none() {
            return Err(RegistryError::Unfinalized);
        }
        let rdf = np
            .rdf()
            .map_err(|e| RegistryError::Serialize(e.to_string()))?;
        let uri = np.info().uri.clone();
        debug!(uri = %uri, "storing nanopublication in memory");
        {
            let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
            entries.insert(uri.clone(), rdf);
        }
        Ok(PublishedInfo {
            uri,
            server: "memory".to_string(),
            published_at: Utc::now().to_rfc3339(),
        })
    }

    async fn fetch(&self, identity: &str) -> Result<Nanopub, RegistryError> {
        let rdf = {
            let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
            entries
                .get(identity)
                .cloned()
                .or_else(|| {
                    entries
                        .iter()
                        .find(|(uri, _)| uri.ends_with(identity))
                        .map(|(_, rdf)| rdf.clone())
                })
                .ok_or_else(|| RegistryError::NotFound(identity.to_string()))?
        };
        crate::verify_fetched(&rdf, identity)
    }
}
