use std::fmt;

use crate::error::StoreError;
use crate::vocab::{RDF_LANG_STRING, XSD_STRING};

/// A literal value together with its datatype and optional language tag.
///
/// Plain literals carry `xsd:string`; language-tagged literals carry
/// `rdf:langString` plus a tag, matching RDF 1.1 semantics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    /// Lexical form of the literal.
    pub lexical: String,
    /// Datatype IRI.
    pub datatype: String,
    /// Language tag, present exactly when the datatype is `rdf:langString`.
    pub language: Option<String>,
}

impl Literal {
    /// Plain `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: XSD_STRING.to_string(),
            language: None,
        }
    }

    /// Typed literal with an explicit datatype IRI.
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    /// Language-tagged literal (`rdf:langString`).
    pub fn lang(lexical: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: RDF_LANG_STRING.to_string(),
            language: Some(tag.into()),
        }
    }
}

/// A single RDF term: IRI, blank node, or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// An IRI reference.
    Iri(String),
    /// A blank node, identified by its label.
    BlankNode(String),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// IRI term from anything string-like.
    pub fn iri(value: impl Into<String>) -> Self {
        Term::Iri(value.into())
    }

    /// The IRI string, if this term is an IRI.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The blank node label, if this term is a blank node.
    pub fn as_blank_node(&self) -> Option<&str> {
        match self {
            Term::BlankNode(label) => Some(label),
            _ => None,
        }
    }

    /// The literal, if this term is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(label) => write!(f, "_:{}", label),
            Term::Literal(lit) => match &lit.language {
                Some(tag) => write!(f, "\"{}\"@{}", lit.lexical, tag),
                None => write!(f, "\"{}\"^^<{}>", lit.lexical, lit.datatype),
            },
        }
    }
}

/// A quad: subject, predicate, object, and the named graph holding it.
///
/// Quads are immutable once stored; graph membership is exactly one of the
/// four nanopublication graphs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    /// Subject term (IRI or blank node).
    pub subject: Term,
    /// Predicate IRI.
    pub predicate: String,
    /// Object term.
    pub object: Term,
    /// IRI of the named graph holding this quad.
    pub graph: String,
}

impl Quad {
    /// Builds a quad, rejecting structurally invalid term positions.
    pub fn new(
        subject: Term,
        predicate: impl Into<String>,
        object: Term,
        graph: impl Into<String>,
    ) -> Result<Self, StoreError> {
        if subject.as_literal().is_some() {
            return Err(StoreError::InvalidQuad("literal in subject position"));
        }
        Ok(Self {
            subject,
            predicate: predicate.into(),
            object,
            graph: graph.into(),
        })
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> {} <{}> .",
            self.subject, self.predicate, self.object, self.graph
        )
    }
}
