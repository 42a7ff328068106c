use thiserror::Error;

/// Errors raised while reading or writing RDF documents.
#[derive(Error, Debug)]
pub enum RdfError {
    /// The input could not be parsed as TriG / N-Quads.
    #[error("error parsing TriG: {0}")]
    Parse(String),
    /// The dataset could not be serialized back to TriG.
    #[error("error serializing TriG: {0}")]
    Serialize(String),
    /// A quad was found outside any named graph.
    #[error("quad found in the default graph; nanopublication quads must live in a named graph")]
    DefaultGraph,
    /// A graph was named by something other than an IRI.
    #[error("graph name is not an IRI: {0}")]
    GraphName(String),
}

/// Errors raised by [`GraphStore`](crate::GraphStore) mutations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store has been frozen; no further mutation is permitted.
    #[error("the nanopublication is frozen and can no longer be modified")]
    Frozen,
    /// The quad names a graph outside the four nanopublication graphs.
    #[error("unknown graph: {0}")]
    UnknownGraph(String),
    /// The quad is structurally invalid (e.g. a literal in subject position).
    #[error("invalid quad: {0}")]
    InvalidQuad(&'static str),
}
