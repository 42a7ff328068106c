use crate::error::StoreError;
use crate::term::Quad;

/// The four graph roles every nanopublication carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphRole {
    /// The head graph, declaring the other three graphs.
    Head,
    /// The assertion graph, holding the published claim.
    Assertion,
    /// The provenance graph, describing where the assertion comes from.
    Provenance,
    /// The publication-info graph, describing the nanopublication itself.
    PubInfo,
}

/// IRIs of the four named graphs of a nanopublication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLabels {
    /// IRI of the head graph.
    pub head: String,
    /// IRI of the assertion graph.
    pub assertion: String,
    /// IRI of the provenance graph.
    pub provenance: String,
    /// IRI of the publication-info graph.
    pub pubinfo: String,
}

impl GraphLabels {
    /// IRI of the graph filling the given role.
    pub fn iri(&self, role: GraphRole) -> &str {
        match role {
            GraphRole::Head => &self.head,
            GraphRole::Assertion => &self.assertion,
            GraphRole::Provenance => &self.provenance,
            GraphRole::PubInfo => &self.pubinfo,
        }
    }

    /// Whether the given IRI names one of the four graphs.
    pub fn contains(&self, graph: &str) -> bool {
        graph == self.head
            || graph == self.assertion
            || graph == self.provenance
            || graph == self.pubinfo
    }
}

/// Insertion-ordered quad store partitioned into named graphs.
///
/// Enumeration order equals insertion order and is meant for diagnostics;
/// canonicalization never relies on it. The store has set semantics: a quad
/// equal to one already present is not inserted twice.
///
/// Once the four graph labels are known, quads naming any other graph are
/// rejected. Once frozen, all mutation is rejected.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    quads: Vec<Quad>,
    labels: Option<GraphLabels>,
    frozen: bool,
}

impl GraphStore {
    /// Empty, unfrozen store with no graph labels yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an unfrozen store from existing quads, keeping their order.
    pub fn from_quads(quads: impl IntoIterator<Item = Quad>) -> Self {
        let mut store = Self::new();
        for quad in quads {
            if !store.quads.contains(&quad) {
                store.quads.push(quad);
            }
        }
        store
    }

    /// Inserts a quad. Returns `true` if the quad was not already present.
    pub fn insert(&mut self, quad: Quad) -> Result<bool, StoreError> {
        if self.frozen {
            return Err(StoreError::Frozen);
        }
        if let Some(labels) = &self.labels {
            if !labels.contains(&quad.graph) {
                return Err(StoreError::UnknownGraph(quad.graph));
            }
        }
        if self.quads.contains(&quad) {
            return Ok(false);
        }
        self.quads.push(quad);
        Ok(true)
    }

    /// Removes a quad. Returns `true` if it was present.
    pub fn remove(&mut self, quad: &Quad) -> Result<bool, StoreError> {
        if self.frozen {
            return Err(StoreError::Frozen);
        }
        let before = self.quads.len();
        self.quads.retain(|q| q != quad);
        Ok(self.quads.len() < before)
    }

    /// All quads in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Quad> {
        self.quads.iter()
    }

    /// Quads belonging to the given named graph, in insertion order.
    pub fn quads_in<'a>(&'a self, graph: &'a str) -> impl Iterator<Item = &'a Quad> {
        self.quads.iter().filter(move |q| q.graph == graph)
    }

    /// Number of quads held.
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    /// Whether the store holds no quads.
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Records the four graph labels; later inserts are checked against them.
    pub fn set_labels(&mut self, labels: GraphLabels) {
        self.labels = Some(labels);
    }

    /// The four graph labels, if already extracted.
    pub fn labels(&self) -> Option<&GraphLabels> {
        self.labels.as_ref()
    }

    /// Freezes the store; every later mutation fails with [`StoreError::Frozen`].
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the store has been frozen.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Unfrozen copy of this store's quads, without labels.
    pub fn working_copy(&self) -> GraphStore {
        GraphStore::from_quads(self.quads.iter().cloned())
    }
}
