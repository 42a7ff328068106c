//! IRIs of the vocabularies used across nanopublications.

/// Nanopublication schema namespace.
pub const NP_SCHEMA: &str = "http://www.nanopub.org/nschema#";
/// Nanopublication extension namespace (signatures and key material).
pub const NPX: &str = "http://purl.org/nanopub/x/";

/// Type IRI asserted on every nanopublication in its head graph.
pub const NANOPUBLICATION: &str = "http://www.nanopub.org/nschema#Nanopublication";
/// Head-graph link to the assertion graph.
pub const HAS_ASSERTION: &str = "http://www.nanopub.org/nschema#hasAssertion";
/// Head-graph link to the provenance graph.
pub const HAS_PROVENANCE: &str = "http://www.nanopub.org/nschema#hasProvenance";
/// Head-graph link to the publication-info graph.
pub const HAS_PUBLICATION_INFO: &str = "http://www.nanopub.org/nschema#hasPublicationInfo";

/// Signature value attached to the signature element in pubinfo.
pub const HAS_SIGNATURE: &str = "http://purl.org/nanopub/x/hasSignature";
/// Public key attached to the signature element in pubinfo.
pub const HAS_PUBLIC_KEY: &str = "http://purl.org/nanopub/x/hasPublicKey";
/// Signature algorithm attached to the signature element in pubinfo.
pub const HAS_ALGORITHM: &str = "http://purl.org/nanopub/x/hasAlgorithm";
/// Link from the signature element to the signed nanopublication.
pub const HAS_SIGNATURE_TARGET: &str = "http://purl.org/nanopub/x/hasSignatureTarget";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// Datatype of language-tagged literals.
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
/// Datatype of plain string literals.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// `dcterms:creator`, one of the attribution predicates scanned in pubinfo.
pub const DCT_CREATOR: &str = "http://purl.org/dc/terms/creator";
/// `prov:wasAttributedTo`, one of the attribution predicates scanned in pubinfo.
pub const PROV_WAS_ATTRIBUTED_TO: &str = "http://www.w3.org/ns/prov#wasAttributedTo";
/// `pav:createdBy`, one of the attribution predicates scanned in pubinfo.
pub const PAV_CREATED_BY: &str = "http://purl.org/pav/createdBy";

/// Temporary base IRI for nanopublications that have not been finalized yet.
pub const TEMP_NP_URI: &str = "http://purl.org/nanopub/temp/mynanopub";
/// Temporary namespace for nanopublications that have not been finalized yet.
pub const TEMP_NP_NS: &str = "http://purl.org/nanopub/temp/mynanopub#";
/// Preferred namespace that finalized identifiers are minted under.
pub const NP_PREF_NS: &str = "https://w3id.org/np/";
