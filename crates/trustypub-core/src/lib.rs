//! Nanopublication lifecycle: construction, signing, trusty identifiers,
//! verification.
//!
//! A [`Nanopub`] is parsed from TriG under a placeholder base IRI, finalized
//! either unsigned ([`Nanopub::make_trusty`]) or signed ([`Nanopub::sign`]),
//! and is frozen from then on. [`Nanopub::check`] recomputes the canonical
//! form to confirm integrity and, when signature quads are present,
//! authenticity. Key material lives in a caller-supplied [`Profile`]; the
//! core never persists it.
//!
#![deny(missing_docs)]

/// Error taxonomy for parsing and signing.
pub mod error;
/// Structural facts extracted from a nanopublication's quads.
pub mod info;
/// The nanopublication object and its lifecycle operations.
pub mod nanopub;
/// Key material, profile files, and key generation.
pub mod profile;
/// Verification report types.
pub mod report;

pub use error::{ParseError, SignError};
pub use info::{extract_info, NpInfo, SignatureInfo};
pub use nanopub::{Nanopub, NpSummary};
pub use profile::{default_profile_path, generate_keys, normalize_key, Profile, ProfileBuilder};
pub use report::ValidationReport;
