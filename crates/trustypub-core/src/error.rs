use thiserror::Error;

use trustypub_canonical::CanonicalError;
use trustypub_rdf::{RdfError, StoreError};

/// Errors raised while constructing a nanopublication from input RDF.
///
/// Always local and recoverable: surfaced to the caller, never retried.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Underlying RDF syntax or model error.
    #[error(transparent)]
    Rdf(#[from] RdfError),
    /// The document does not assert any nanopublication.
    #[error("the provided RDF does not contain a nanopublication")]
    NoNanopub,
    /// The document asserts more than one nanopublication.
    #[error("the provided RDF contains multiple nanopublications; only one can be provided at a time")]
    MultipleNanopubs,
    /// One of the four mandatory graphs is not declared.
    #[error("invalid nanopublication: no {0} graph found")]
    MissingGraph(&'static str),
    /// The assertion graph holds no quads.
    #[error("invalid nanopublication: the assertion graph is empty")]
    EmptyAssertion,
}

/// Errors raised while signing or finalizing a nanopublication.
///
/// All-or-nothing: when signing fails the input object is left untouched.
#[derive(Error, Debug)]
pub enum SignError {
    /// The key material could not be decoded or used.
    #[error("invalid key material: {0}")]
    InvalidKey(String),
    /// OpenSSH-formatted keys are not supported.
    #[error("keys in OpenSSH format are not supported; convert to PKCS#8, or generate a new one with `ssh-keygen -t rsa -m PKCS8 -b 4096 -f ~/.trustypub/id_rsa`")]
    UnsupportedKeyFormat,
    /// The ORCID does not use the canonical prefix.
    #[error("the ORCID should start with https://orcid.org/")]
    InvalidOrcid,
    /// The object already carries a signature; re-signing requires explicit
    /// intent via `resign`.
    #[error("the nanopublication is already signed; use resign to replace the signature")]
    AlreadySigned,
    /// The object already carries a trusty identifier and cannot be
    /// finalized again.
    #[error("the nanopublication already carries a trusty identifier")]
    AlreadyTrusty,
    /// The declared signature algorithm is not supported.
    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),
    /// No key material was supplied and none could be loaded.
    #[error("no key material available: {0}")]
    MissingProfile(String),
    /// RSA signing failed.
    #[error("RSA error: {0}")]
    Rsa(#[from] rsa::Error),
    /// Canonicalization of the signable subset failed.
    #[error(transparent)]
    Canonical(#[from] CanonicalError),
    /// A rebuilt store rejected one of its quads.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The finalized store no longer parses as a nanopublication.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Reading key or profile files failed.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
    /// The profile file could not be interpreted.
    #[error("invalid profile file: {0}")]
    ProfileFile(String),
}

impl From<rsa::pkcs8::Error> for SignError {
    fn from(err: rsa::pkcs8::Error) -> Self {
        SignError::InvalidKey(err.to_string())
    }
}

impl From<rsa::pkcs8::spki::Error> for SignError {
    fn from(err: rsa::pkcs8::spki::Error) -> Self {
        SignError::InvalidKey(err.to_string())
    }
}

impl From<base64::DecodeError> for SignError {
    fn from(err: base64::DecodeError) -> Self {
        SignError::InvalidKey(err.to_string())
    }
}
