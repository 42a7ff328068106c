use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use tracing::debug;

use trustypub_rdf::GraphStore;

use crate::normalize::normalize;
use crate::CanonicalError;

/// Closed set of artifact kinds sharing the trusty identifier format.
///
/// The two-character prefix is the type tag consumers dispatch on; the two
/// kinds always carry distinct prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A nanopublication finalized with an embedded signature.
    Signed,
    /// A nanopublication finalized without a signature.
    Unsigned,
}

impl ArtifactKind {
    /// Two-character identifier prefix for this kind.
    pub fn prefix(self) -> &'static str {
        match self {
            ArtifactKind::Signed => "RA",
            ArtifactKind::Unsigned => "RB",
        }
    }

    /// Recovers the kind from an identifier's leading characters.
    pub fn from_prefix(value: &str) -> Option<Self> {
        match value.get(..2) {
            Some("RA") => Some(ArtifactKind::Signed),
            Some("RB") => Some(ArtifactKind::Unsigned),
            _ => None,
        }
    }
}

/// Digest algorithms usable for trusty identifier generation.
///
/// Selected per call; there is no process-wide algorithm configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DigestAlg {
    /// SHA-256, the current default.
    #[serde(rename = "sha-256")]
    Sha256,
}

/// A validated trusty identifier.
///
/// Format: a two-character kind prefix followed by the 43-character
/// URL-safe, unpadded base64 encoding of a SHA-256 digest of the canonical
/// form. Immutable once assigned; any change to graph content produces a
/// different identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrustyId(String);

impl TrustyId {
    /// Parses and validates an identifier string.
    pub fn parse(value: impl Into<String>) -> Result<Self, CanonicalError> {
        let value = value.into();
        let re = Regex::new(r"^R[AB][A-Za-z0-9_-]{43}$").expect("invalid regex");
        if !re.is_match(&value) {
            return Err(CanonicalError::InvalidIdentifier(value));
        }
        Ok(TrustyId(value))
    }

    /// The artifact kind encoded in the prefix.
    pub fn kind(&self) -> ArtifactKind {
        // The constructor only admits the two known prefixes.
        ArtifactKind::from_prefix(&self.0).unwrap_or(ArtifactKind::Signed)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TrustyId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrustyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Digests the canonical form of `store` and mints the typed identifier.
///
/// Identical graph content, kind, and algorithm always yield the identical
/// identifier: this is a pure function of the canonical bytes.
pub fn make_trusty(
    store: &GraphStore,
    base_ns: &str,
    norm_ns: &str,
    separator: &str,
    kind: ArtifactKind,
    alg: DigestAlg,
) -> Result<TrustyId, CanonicalError> {
    let canonical = normalize(store, base_ns, norm_ns, separator);
    let encoded = match alg {
        DigestAlg::Sha256 => URL_SAFE_NO_PAD.encode(Sha256::digest(canonical.as_bytes())),
    };
    let id = format!("{}{}", kind.prefix(), encoded);
    debug!(kind = ?kind, id = %id, "minted trusty identifier");
    Ok(TrustyId(id))
}
