//! Deterministic canonical form and trusty identifiers for nanopublications.
//!
//! The canonical form is a byte-exact, order-independent serialization of a
//! nanopublication's quads in which every occurrence of the object's own base
//! IRI has been rewritten onto a placeholder namespace. The same bytes feed
//! both signing and identifier generation, which is what lets the final
//! identifier transitively certify an embedded signature.
//!
#![deny(missing_docs)]

/// Blank-node relabeling, namespace rewriting, and normalization.
pub mod normalize;
/// Typed trusty identifiers and their generation.
pub mod trusty;

use thiserror::Error;

pub use normalize::{normalize, relabel_blank_nodes, rewrite_namespace};
pub use trusty::{make_trusty, ArtifactKind, DigestAlg, TrustyId};

/// Errors raised while canonicalizing a nanopublication.
#[derive(Error, Debug)]
pub enum CanonicalError {
    /// The base IRI produced an unusable relabeling pattern.
    #[error("invalid relabeling pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// A rebuilt store rejected one of its own quads.
    #[error(transparent)]
    Store(#[from] trustypub_rdf::StoreError),
    /// A candidate identifier does not have the trusty shape.
    #[error("not a valid trusty identifier: {0}")]
    InvalidIdentifier(String),
}
