//! Quad data model and four-graph store for trusty nanopublications.
//!
//! A nanopublication is a small RDF dataset partitioned into exactly four
//! named graphs (head, assertion, provenance, pubinfo). This crate holds the
//! typed term/quad primitives, the insertion-ordered [`GraphStore`] those
//! quads live in, and the TriG boundary used to read and write them.
//! Everything that participates in hashing or signing is built on these
//! types.
//!
#![deny(missing_docs)]

/// Error types for parsing, serialization, and store operations.
pub mod error;
/// TriG parsing and serialization at the sophia boundary.
pub mod parse;
/// Insertion-ordered quad store partitioned into named graphs.
pub mod store;
/// RDF term and quad primitives.
pub mod term;
/// IRIs of the vocabularies used across nanopublications.
pub mod vocab;

pub use error::{RdfError, StoreError};
pub use parse::{parse_trig, serialize_trig};
pub use store::{GraphLabels, GraphRole, GraphStore};
pub use term::{Literal, Quad, Term};
