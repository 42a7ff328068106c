use sophia::api::dataset::{Dataset, MutableDataset};
use sophia::api::prefix::Prefix;
use sophia::api::quad::Quad as _;
use sophia::api::serializer::{QuadSerializer as _, Stringifier as _};
use sophia::api::source::QuadSource as _;
use sophia::api::term::{BnodeId, IriRef, LanguageTag, SimpleTerm, Term as _};
use sophia::api::MownStr;
use sophia::inmem::dataset::LightDataset;
use sophia::iri::Iri;
use sophia::turtle::parser::trig;
use sophia::turtle::serializer::trig::{TrigConfig, TrigSerializer};

use crate::error::RdfError;
use crate::store::GraphStore;
use crate::term::{Literal, Quad, Term};
use crate::vocab;

/// Parses a TriG (or N-Quads) document into a [`GraphStore`].
///
/// Every quad must live in a named graph; default-graph triples are rejected
/// because they cannot belong to any of the four nanopublication graphs.
pub fn parse_trig(rdf: &str) -> Result<GraphStore, RdfError> {
    let dataset: LightDataset = trig::parse_str(rdf)
        .collect_quads()
        .map_err(|e| RdfError::Parse(e.to_string()))?;

    let mut store = GraphStore::new();
    for quad in dataset.quads() {
        let quad = quad.map_err(|e| RdfError::Parse(e.to_string()))?;
        let graph = match quad.g() {
            None => return Err(RdfError::DefaultGraph),
            Some(g) => g
                .iri()
                .map(|iri| iri.to_string())
                .ok_or_else(|| RdfError::GraphName(format!("{:?}", g.kind())))?,
        };
        let subject = import_term(quad.s())?;
        let predicate = quad
            .p()
            .iri()
            .map(|iri| iri.to_string())
            .ok_or_else(|| RdfError::Parse("predicate is not an IRI".to_string()))?;
        let object = import_term(quad.o())?;
        let quad = Quad::new(subject, predicate, object, graph)
            .map_err(|e| RdfError::Parse(e.to_string()))?;
        store
            .insert(quad)
            .map_err(|e| RdfError::Parse(e.to_string()))?;
    }
    Ok(store)
}

/// Serializes a [`GraphStore`] to pretty TriG under the usual nanopub prefixes.
pub fn serialize_trig(store: &GraphStore, uri: &str, ns: &str) -> Result<String, RdfError> {
    let mut dataset = LightDataset::new();
    for quad in store.iter() {
        dataset
            .insert(
                &export_term(&quad.subject),
                &export_iri(&quad.predicate),
                &export_term(&quad.object),
                Some(&export_iri(&quad.graph)),
            )
            .map_err(|e| RdfError::Serialize(e.to_string()))?;
    }

    let prefixes = prefix_map(uri, ns);
    let config = TrigConfig::new()
        .with_pretty(true)
        .with_prefix_map(&prefixes[..]);
    let mut stringifier = TrigSerializer::new_stringifier_with_config(config);
    Ok(stringifier
        .serialize_dataset(&dataset)
        .map_err(|e| RdfError::Serialize(e.to_string()))?
        .to_string())
}

fn import_term<T: sophia::api::term::Term>(term: T) -> Result<Term, RdfError> {
    if term.is_blank_node() {
        let label = term
            .bnode_id()
            .ok_or_else(|| RdfError::Parse("blank node without a label".to_string()))?;
        return Ok(Term::BlankNode(label.to_string()));
    }
    if let Some(iri) = term.iri() {
        return Ok(Term::Iri(iri.to_string()));
    }
    let lexical = term
        .lexical_form()
        .ok_or_else(|| RdfError::Parse("unsupported term kind".to_string()))?
        .to_string();
    if let Some(tag) = term.language_tag() {
        return Ok(Term::Literal(Literal::lang(lexical, tag.to_string())));
    }
    let datatype = term
        .datatype()
        .map(|dt| dt.to_string())
        .unwrap_or_else(|| vocab::XSD_STRING.to_string());
    Ok(Term::Literal(Literal::typed(lexical, datatype)))
}

fn export_term(term: &Term) -> SimpleTerm<'_> {
    match term {
        Term::Iri(iri) => export_iri(iri),
        Term::BlankNode(label) => {
            SimpleTerm::BlankNode(BnodeId::new_unchecked(MownStr::from(label.as_str())))
        }
        Term::Literal(lit) => match &lit.language {
            Some(tag) => SimpleTerm::LiteralLanguage(
                MownStr::from(lit.lexical.as_str()),
                LanguageTag::new_unchecked(MownStr::from(tag.as_str())),
            ),
            None => SimpleTerm::LiteralDatatype(
                MownStr::from(lit.lexical.as_str()),
                IriRef::new_unchecked(MownStr::from(lit.datatype.as_str())),
            ),
        },
    }
}

fn export_iri(iri: &str) -> SimpleTerm<'_> {
    SimpleTerm::Iri(IriRef::new_unchecked(MownStr::from(iri)))
}

/// Prefix declarations emitted on serialized nanopublications.
fn prefix_map(uri: &str, ns: &str) -> Vec<(Prefix<String>, Iri<String>)> {
    [
        ("this", uri),
        ("sub", ns),
        ("np", vocab::NP_SCHEMA),
        ("npx", vocab::NPX),
        ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
        ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ("dct", "http://purl.org/dc/terms/"),
        ("prov", "http://www.w3.org/ns/prov#"),
        ("pav", "http://purl.org/pav/"),
        ("foaf", "http://xmlns.com/foaf/0.1/"),
        ("orcid", "https://orcid.org/"),
    ]
    .into_iter()
    .map(|(prefix, iri)| {
        (
            Prefix::new_unchecked(prefix.to_string()),
            Iri::new_unchecked(iri.to_string()),
        )
    })
    .collect()
}
